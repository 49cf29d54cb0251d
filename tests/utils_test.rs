use racerx::config::{DEFAULT_ORIGIN, resolve_api_url};
use racerx::management::{NO_TRACKS_MESSAGE, render_tracks};
use racerx::types::{NewTrack, Track, TrackUpdate, User};
use racerx::utils::*;

// Helper function to create a test track
fn create_test_track(id: u64, name: &str, location: &str) -> Track {
    Track {
        id,
        name: name.to_string(),
        location: location.to_string(),
        created_at: None,
        updated_at: None,
    }
}

fn create_test_user(id: u64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        created_at: None,
    }
}

#[test]
fn test_resolve_api_url_defaults_to_relative_prefix() {
    assert_eq!(resolve_api_url(None, DEFAULT_ORIGIN), "http://localhost:5555/api");
    assert_eq!(resolve_api_url(Some(""), DEFAULT_ORIGIN), "http://localhost:5555/api");
    assert_eq!(resolve_api_url(Some("   "), DEFAULT_ORIGIN), "http://localhost:5555/api");
}

#[test]
fn test_resolve_api_url_keeps_absolute_override() {
    assert_eq!(
        resolve_api_url(Some("https://racerx.example.com/v1/"), DEFAULT_ORIGIN),
        "https://racerx.example.com/v1"
    );
}

#[test]
fn test_resolve_api_url_joins_relative_override() {
    assert_eq!(
        resolve_api_url(Some("/backend"), "http://localhost:5173/"),
        "http://localhost:5173/backend"
    );
    assert_eq!(
        resolve_api_url(Some("backend/"), "http://localhost:5173"),
        "http://localhost:5173/backend"
    );
}

#[test]
fn test_render_tracks_placeholder_only_when_empty() {
    assert_eq!(render_tracks(&[]), NO_TRACKS_MESSAGE);

    let rendered = render_tracks(&[
        create_test_track(1, "Laguna Seca", "Monterey"),
        create_test_track(2, "Sebring", "Florida"),
    ]);
    assert_ne!(rendered, NO_TRACKS_MESSAGE);
    assert!(rendered.contains("Laguna Seca"));
    assert!(rendered.contains("Sebring"));
    assert!(rendered.contains("location"));
}

#[test]
fn test_track_update_serializes_only_set_fields() {
    let update = TrackUpdate {
        name: Some("X".to_string()),
        location: None,
    };

    let json = serde_json::to_value(&update).unwrap();

    assert_eq!(json, serde_json::json!({ "name": "X" }));
}

#[test]
fn test_new_track_without_location_omits_field() {
    let track = NewTrack {
        name: "Spa".to_string(),
        location: None,
    };

    let json = serde_json::to_value(&track).unwrap();

    assert_eq!(json, serde_json::json!({ "name": "Spa" }));
}

#[test]
fn test_track_deserializes_without_optional_fields() {
    let track: Track = serde_json::from_str(r#"{"id": 7, "name": "Monza"}"#).unwrap();

    assert_eq!(track, create_test_track(7, "Monza", ""));
}

#[test]
fn test_track_deserializes_null_location_as_empty() {
    let track: Track =
        serde_json::from_str(r#"{"id": 1, "name": "Spa", "location": null}"#).unwrap();

    assert_eq!(track, create_test_track(1, "Spa", ""));
}

#[test]
fn test_user_rows_sorted_by_username() {
    let users = vec![
        create_test_user(1, "zoe"),
        create_test_user(2, "Adam"),
        create_test_user(3, "mia"),
    ];

    let rows = user_rows(&users);
    let names: Vec<&str> = rows.iter().map(|r| r.username.as_str()).collect();

    assert_eq!(names, vec!["Adam", "mia", "zoe"]);
}

#[test]
fn test_non_empty_filters_blank_values() {
    assert_eq!(non_empty(Some("Monza".to_string())), Some("Monza".to_string()));
    assert_eq!(non_empty(Some("  ".to_string())), None);
    assert_eq!(non_empty(None), None);
}

#[test]
fn test_to_pretty_json_formats_objects() {
    let track = create_test_track(1, "Imola", "Italy");

    let json = to_pretty_json(&track);

    assert!(json.contains("\"name\": \"Imola\""));
    assert!(json.contains('\n'));
}
