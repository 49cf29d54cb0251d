use reqwest::{StatusCode, header::HeaderMap};
use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Tabled)]
pub struct UserTableRow {
    pub id: u64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Confirmation body of register and delete calls. Backends are free to send
/// other fields or none at all; those end up in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: Some(message.into()),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: u64,
    pub name: String,
    pub location: String,
}

impl From<&Track> for TrackTableRow {
    fn from(track: &Track) -> Self {
        TrackTableRow {
            id: track.id,
            name: track.name.clone(),
            location: track.location.clone(),
        }
    }
}

/// Payload for creating a track. The backend assigns `id` and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrack {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Partial track update. Only fields that are `Some` end up in the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackLink {
    pub id: u64,
    pub track_id: u64,
    pub link_type: String,
    pub link_url: String,
}

#[derive(Tabled)]
pub struct TrackLinkTableRow {
    pub id: u64,
    #[tabled(rename = "type")]
    pub link_type: String,
    #[tabled(rename = "url")]
    pub link_url: String,
}

impl From<&TrackLink> for TrackLinkTableRow {
    fn from(link: &TrackLink) -> Self {
        TrackLinkTableRow {
            id: link.id,
            link_type: link.link_type.clone(),
            link_url: link.link_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrackLink {
    pub link_type: String,
    pub link_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackLinkUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

/// A response as handed back by the HTTP layer: status and headers are kept,
/// the body is decoded into `data`.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: T,
}

/// Missing and `null` strings both decode as `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
