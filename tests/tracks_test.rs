mod common;

use std::{sync::Arc, time::Duration};

use axum::{Extension, Json, Router, routing::get};
use racerx::{
    api::{self, Store},
    management::{Dashboard, NO_TRACKS_MESSAGE},
    types::{Health, NewTrack, NewTrackLink, Track, TrackLinkUpdate, TrackQuery, TrackUpdate},
};
use reqwest::StatusCode;
use serde_json::json;
use tokio::sync::Barrier;

use common::{spawn_backend, spawn_router, spawn_seeded_backend, unreachable_client};

fn new_track(name: &str, location: &str) -> NewTrack {
    NewTrack {
        name: name.to_string(),
        location: Some(location.to_string()),
    }
}

#[tokio::test]
async fn test_health_check_returns_message() {
    let client = spawn_backend().await;

    let response = client.health_check().await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data.message, "Racer X is running");
    assert_eq!(response.data.status.as_deref(), Some("healthy"));
}

#[tokio::test]
async fn test_get_tracks_on_empty_backend() {
    let client = spawn_backend().await;

    let response = client.get_tracks().await.unwrap();

    assert!(response.data.is_empty());
}

#[tokio::test]
async fn test_create_then_get_returns_same_record() {
    let client = spawn_backend().await;

    let created = client
        .create_track(&new_track("Laguna Seca", "Monterey"))
        .await
        .unwrap();
    assert_eq!(created.status, StatusCode::CREATED);

    let fetched = client.get_track(created.data.id).await.unwrap().data;

    assert_eq!(fetched.id, created.data.id);
    assert_eq!(fetched.name, "Laguna Seca");
    assert_eq!(fetched.location, "Monterey");
    assert_eq!(fetched, created.data);
}

#[tokio::test]
async fn test_create_without_location_defaults_to_empty() {
    let client = spawn_backend().await;

    let created = client
        .create_track(&NewTrack {
            name: "Spa".to_string(),
            location: None,
        })
        .await
        .unwrap()
        .data;

    assert_eq!(created.location, "");
}

#[tokio::test]
async fn test_create_with_empty_name_is_rejected() {
    let client = spawn_backend().await;

    let err = client
        .create_track(&new_track("", "Nowhere"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_get_tracks_lists_created_tracks() {
    let client = spawn_backend().await;
    client
        .create_track(&new_track("Suzuka", "Mie"))
        .await
        .unwrap();
    client
        .create_track(&new_track("Monza", "Lombardy"))
        .await
        .unwrap();

    let tracks = client.get_tracks().await.unwrap().data;

    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Suzuka", "Monza"]);
}

#[tokio::test]
async fn test_update_name_keeps_other_fields() {
    let client = spawn_backend().await;
    let created = client
        .create_track(&new_track("Laguna Seca", "Monterey"))
        .await
        .unwrap()
        .data;

    let update = TrackUpdate {
        name: Some("X".to_string()),
        location: None,
    };
    let updated = client.update_track(created.id, &update).await.unwrap().data;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "X");
    assert_eq!(updated.location, "Monterey");
    assert_eq!(updated.created_at, created.created_at);

    let fetched = client.get_track(created.id).await.unwrap().data;
    assert_eq!(fetched.name, "X");
    assert_eq!(fetched.location, "Monterey");
}

#[tokio::test]
async fn test_update_unknown_track_is_not_found() {
    let client = spawn_backend().await;

    let err = client
        .update_track(404, &TrackUpdate::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let client = spawn_backend().await;
    let created = client
        .create_track(&new_track("Imola", "Emilia-Romagna"))
        .await
        .unwrap()
        .data;

    let deleted = client.delete_track(created.id).await.unwrap();
    assert_eq!(deleted.status, StatusCode::OK);

    let err = client.get_track(created.id).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

    let err = client.delete_track(created.id).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_search_matches_case_insensitive_substrings() {
    let client = spawn_backend().await;
    client
        .create_track(&new_track("Laguna Seca", "Monterey"))
        .await
        .unwrap();
    client
        .create_track(&new_track("Sonoma Raceway", "Sonoma"))
        .await
        .unwrap();
    client
        .create_track(&new_track("Road America", "Elkhart Lake"))
        .await
        .unwrap();

    let by_name = client
        .search_tracks(&TrackQuery {
            name: Some("RACEWAY".to_string()),
            location: None,
        })
        .await
        .unwrap()
        .data;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Sonoma Raceway");

    let by_both = client
        .search_tracks(&TrackQuery {
            name: Some("a".to_string()),
            location: Some("lake".to_string()),
        })
        .await
        .unwrap()
        .data;
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].name, "Road America");

    let all = client
        .search_tracks(&TrackQuery::default())
        .await
        .unwrap()
        .data;
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_track_links_lifecycle() {
    let client = spawn_backend().await;
    let track = client
        .create_track(&new_track("Nürburgring", "Nürburg"))
        .await
        .unwrap()
        .data;

    let link = client
        .create_track_link(
            track.id,
            &NewTrackLink {
                link_type: "wiki".to_string(),
                link_url: "https://example.com/nordschleife".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(link.status, StatusCode::CREATED);
    assert_eq!(link.data.track_id, track.id);

    let updated = client
        .update_track_link(
            track.id,
            link.data.id,
            &TrackLinkUpdate {
                link_type: Some("map".to_string()),
                link_url: None,
            },
        )
        .await
        .unwrap()
        .data;
    assert_eq!(updated.link_type, "map");
    assert_eq!(updated.link_url, "https://example.com/nordschleife");

    let links = client.get_track_links(track.id).await.unwrap().data;
    assert_eq!(links, vec![updated]);

    client
        .delete_track_link(track.id, link.data.id)
        .await
        .unwrap();
    assert!(client.get_track_links(track.id).await.unwrap().data.is_empty());
}

#[tokio::test]
async fn test_links_of_missing_track_are_not_found() {
    let client = spawn_backend().await;

    let err = client.get_track_links(99).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_deleting_track_removes_its_links() {
    let client = spawn_backend().await;
    let track = client
        .create_track(&new_track("Silverstone", "Northamptonshire"))
        .await
        .unwrap()
        .data;
    let link = client
        .create_track_link(
            track.id,
            &NewTrackLink {
                link_type: "site".to_string(),
                link_url: "https://example.com/silverstone".to_string(),
            },
        )
        .await
        .unwrap()
        .data;

    client.delete_track(track.id).await.unwrap();

    let err = client
        .delete_track_link(track.id, link.id)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_network_failure_is_an_error_without_status() {
    let client = unreachable_client().await;

    let err = client.get_tracks().await.unwrap_err();

    assert!(err.status().is_none());
    assert!(err.is_connect());
}

#[tokio::test]
async fn test_dashboard_loads_health_and_tracks() {
    let client = spawn_backend().await;
    client
        .create_track(&new_track("Bathurst", "New South Wales"))
        .await
        .unwrap();

    let dashboard = Dashboard::load(&client).await;

    assert_eq!(dashboard.health.as_deref(), Some("Racer X is running"));
    assert_eq!(dashboard.tracks.len(), 1);
    assert!(dashboard.render_tracks().contains("Bathurst"));
}

#[tokio::test]
async fn test_dashboard_renders_placeholder_for_empty_list() {
    let client = spawn_backend().await;

    let dashboard = Dashboard::load(&client).await;

    assert!(dashboard.health.is_some());
    assert!(dashboard.tracks.is_empty());
    assert_eq!(dashboard.render_tracks(), NO_TRACKS_MESSAGE);
}

#[tokio::test]
async fn test_dashboard_health_failure_keeps_tracks() {
    let store = Store::shared();
    let app = Router::new()
        .route(
            "/api/tracks",
            get(api::list_tracks).post(api::create_track),
        )
        .layer(Extension(store));
    let client = spawn_router(app).await;
    client
        .create_track(&new_track("Mugello", "Tuscany"))
        .await
        .unwrap();

    let dashboard = Dashboard::load(&client).await;

    assert_eq!(dashboard.health, None);
    assert_eq!(dashboard.tracks.len(), 1);
    assert_eq!(dashboard.tracks[0].name, "Mugello");
}

#[tokio::test]
async fn test_dashboard_tracks_failure_keeps_health() {
    let app = Router::new().route("/api/health", get(api::health));
    let client = spawn_router(app).await;

    let dashboard = Dashboard::load(&client).await;

    assert_eq!(dashboard.health.as_deref(), Some("Racer X is running"));
    assert!(dashboard.tracks.is_empty());
}

#[tokio::test]
async fn test_dashboard_with_unreachable_backend_does_not_fail() {
    let client = unreachable_client().await;

    let dashboard = Dashboard::load(&client).await;

    assert_eq!(dashboard, Dashboard::default());
    assert_eq!(dashboard.render_tracks(), NO_TRACKS_MESSAGE);
}

#[tokio::test]
async fn test_dashboard_fetches_overlap_and_finish_in_any_order() {
    // Both handlers block until the other request has arrived, so the load
    // only completes when the two requests are in flight together. Health
    // additionally finishes last.
    let barrier = Arc::new(Barrier::new(2));
    let health_barrier = Arc::clone(&barrier);
    let tracks_barrier = Arc::clone(&barrier);

    let app = Router::new()
        .route(
            "/api/health",
            get(move || {
                let barrier = Arc::clone(&health_barrier);
                async move {
                    barrier.wait().await;
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    Json(Health {
                        status: None,
                        message: "ok".to_string(),
                    })
                }
            }),
        )
        .route(
            "/api/tracks",
            get(move || {
                let barrier = Arc::clone(&tracks_barrier);
                async move {
                    barrier.wait().await;
                    Json(vec![Track {
                        id: 1,
                        name: "Spa".to_string(),
                        location: "Stavelot".to_string(),
                        created_at: None,
                        updated_at: None,
                    }])
                }
            }),
        );
    let client = spawn_router(app).await;

    let dashboard = tokio::time::timeout(Duration::from_secs(5), Dashboard::load(&client))
        .await
        .expect("dashboard requests did not run concurrently");

    assert_eq!(dashboard.health.as_deref(), Some("ok"));
    assert_eq!(dashboard.tracks.len(), 1);
    assert_eq!(dashboard.tracks[0].name, "Spa");
}

#[tokio::test]
async fn test_dashboard_keeps_tracks_with_null_location() {
    let app = Router::new().route(
        "/api/tracks",
        get(|| async {
            Json(json!([
                { "id": 1, "name": "Spa", "location": null },
                { "id": 2, "name": "Monza", "location": "Lombardy" }
            ]))
        }),
    );
    let client = spawn_router(app).await;

    let dashboard = Dashboard::load(&client).await;

    assert_eq!(dashboard.tracks.len(), 2);
    assert_eq!(dashboard.tracks[0].location, "");
    assert_eq!(dashboard.tracks[1].location, "Lombardy");
}

#[tokio::test]
async fn test_seeded_backend_lists_demo_tracks_and_links() {
    let client = spawn_seeded_backend().await;

    let tracks = client.get_tracks().await.unwrap().data;

    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Whoa Ghana",
            "No Hitting",
            "Donut City",
            "Can I Get an Intro",
            "Dorrie's Dumpling"
        ]
    );

    let links = client.get_track_links(tracks[0].id).await.unwrap().data;
    let kinds: Vec<&str> = links.iter().map(|l| l.link_type.as_str()).collect();
    assert_eq!(kinds, vec!["youtube", "spotify"]);

    let dashboard = Dashboard::load(&client).await;
    assert!(dashboard.render_tracks().contains("Dorrie's Dumpling"));
}
