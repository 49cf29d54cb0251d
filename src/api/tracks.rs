use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

use crate::types::{
    MessageResponse, Track, TrackLink, TrackLinkUpdate, TrackQuery, TrackUpdate,
};

use super::store::{ApiError, SharedStore, now};

#[derive(Debug, Deserialize)]
pub struct CreateTrackBody {
    name: Option<String>,
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateLinkBody {
    link_type: Option<String>,
    link_url: Option<String>,
}

pub async fn list_tracks(Extension(store): Extension<SharedStore>) -> Json<Vec<Track>> {
    let store = store.lock().await;
    Json(store.tracks.values().cloned().collect())
}

pub async fn get_track(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<Track>, ApiError> {
    let store = store.lock().await;
    Ok(Json(store.track(id)?.clone()))
}

pub async fn create_track(
    Extension(store): Extension<SharedStore>,
    Json(body): Json<CreateTrackBody>,
) -> Result<(StatusCode, Json<Track>), ApiError> {
    let name = body
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing required field: name"))?;

    let mut store = store.lock().await;
    let id = store.next_id();
    let timestamp = now();
    let track = Track {
        id,
        name,
        location: body.location.unwrap_or_default(),
        created_at: Some(timestamp.clone()),
        updated_at: Some(timestamp),
    };
    store.tracks.insert(id, track.clone());

    Ok((StatusCode::CREATED, Json(track)))
}

pub async fn update_track(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<u64>,
    Json(update): Json<TrackUpdate>,
) -> Result<Json<Track>, ApiError> {
    let mut store = store.lock().await;
    let track = store.track_mut(id)?;

    if let Some(name) = update.name {
        track.name = name;
    }
    if let Some(location) = update.location {
        track.location = location;
    }
    track.updated_at = Some(now());

    Ok(Json(track.clone()))
}

pub async fn delete_track(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = store.lock().await;
    store.track(id)?;
    store.tracks.remove(&id);
    store.links.retain(|_, link| link.track_id != id);

    Ok(Json(MessageResponse::new("Track deleted")))
}

pub async fn search_tracks(
    Extension(store): Extension<SharedStore>,
    Query(query): Query<TrackQuery>,
) -> Json<Vec<Track>> {
    let name = query.name.map(|n| n.to_lowercase());
    let location = query.location.map(|l| l.to_lowercase());

    let store = store.lock().await;
    let matches = store
        .tracks
        .values()
        .filter(|t| contains(&t.name, name.as_deref()))
        .filter(|t| contains(&t.location, location.as_deref()))
        .cloned()
        .collect();

    Json(matches)
}

pub async fn list_links(
    Extension(store): Extension<SharedStore>,
    Path(track_id): Path<u64>,
) -> Result<Json<Vec<TrackLink>>, ApiError> {
    let store = store.lock().await;
    store.track(track_id)?;

    Ok(Json(
        store
            .links
            .values()
            .filter(|l| l.track_id == track_id)
            .cloned()
            .collect(),
    ))
}

pub async fn create_link(
    Extension(store): Extension<SharedStore>,
    Path(track_id): Path<u64>,
    Json(body): Json<CreateLinkBody>,
) -> Result<(StatusCode, Json<TrackLink>), ApiError> {
    let (Some(link_type), Some(link_url)) = (
        body.link_type.filter(|v| !v.trim().is_empty()),
        body.link_url.filter(|v| !v.trim().is_empty()),
    ) else {
        return Err(ApiError::bad_request(
            "Missing required fields: link_type, link_url",
        ));
    };

    let mut store = store.lock().await;
    store.track(track_id)?;

    let id = store.next_id();
    let link = TrackLink {
        id,
        track_id,
        link_type,
        link_url,
    };
    store.links.insert(id, link.clone());

    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn update_link(
    Extension(store): Extension<SharedStore>,
    Path((track_id, link_id)): Path<(u64, u64)>,
    Json(update): Json<TrackLinkUpdate>,
) -> Result<Json<TrackLink>, ApiError> {
    let mut store = store.lock().await;
    store.track(track_id)?;
    let link = store.link_mut(track_id, link_id)?;

    if let Some(link_type) = update.link_type {
        link.link_type = link_type;
    }
    if let Some(link_url) = update.link_url {
        link.link_url = link_url;
    }

    Ok(Json(link.clone()))
}

pub async fn delete_link(
    Extension(store): Extension<SharedStore>,
    Path((track_id, link_id)): Path<(u64, u64)>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = store.lock().await;
    store.track(track_id)?;
    store.link_mut(track_id, link_id)?;
    store.links.remove(&link_id);

    Ok(Json(MessageResponse::new("Link deleted")))
}

fn contains(haystack: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|n| haystack.to_lowercase().contains(n))
}
