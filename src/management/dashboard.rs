use tabled::Table;

use crate::{
    client::ApiClient,
    types::{Track, TrackTableRow},
    warning,
};

pub const NO_TRACKS_MESSAGE: &str = "No tracks found.";

/// State behind the `tracks` overview: the backend health message, if the
/// check succeeded, and whatever track list was fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub health: Option<String>,
    pub tracks: Vec<Track>,
}

impl Dashboard {
    /// Issues the health check and the track listing together.
    ///
    /// The two requests run concurrently and finish in any order. Each one
    /// writes only its own slot, and a failure is logged and leaves that slot
    /// at its default (`None` / empty) without affecting the other.
    pub async fn load(client: &ApiClient) -> Self {
        let (health, tracks) = tokio::join!(fetch_health(client), fetch_tracks(client));

        Dashboard {
            health,
            tracks: tracks.unwrap_or_default(),
        }
    }

    /// Renders the track list as a table, or the placeholder when it is empty.
    pub fn render_tracks(&self) -> String {
        render_tracks(&self.tracks)
    }
}

pub fn render_tracks(tracks: &[Track]) -> String {
    if tracks.is_empty() {
        return NO_TRACKS_MESSAGE.to_string();
    }

    let rows: Vec<TrackTableRow> = tracks.iter().map(TrackTableRow::from).collect();
    Table::new(rows).to_string()
}

async fn fetch_health(client: &ApiClient) -> Option<String> {
    match client.health_check().await {
        Ok(response) => Some(response.data.message),
        Err(e) => {
            warning!("Health check failed. Err: {}", e);
            None
        }
    }
}

async fn fetch_tracks(client: &ApiClient) -> Option<Vec<Track>> {
    match client.get_tracks().await {
        Ok(response) => Some(response.data),
        Err(e) => {
            warning!("Failed to fetch tracks. Err: {}", e);
            None
        }
    }
}
