use crate::types::{
    ApiResponse, Health, NewTrack, NewTrackLink, Track, TrackLink, TrackLinkUpdate, TrackQuery,
    TrackUpdate,
};

use super::{ApiClient, send_empty, send_json};

impl ApiClient {
    /// Checks backend liveness via `GET /health`.
    ///
    /// # Returns
    ///
    /// The health record; `message` is what the overview prints.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses and bodies without a `message`.
    pub async fn health_check(&self) -> Result<ApiResponse<Health>, reqwest::Error> {
        send_json(self.http.get(self.url("/health"))).await
    }

    /// Lists every track, `GET /tracks`. An empty collection yields an empty vector.
    pub async fn get_tracks(&self) -> Result<ApiResponse<Vec<Track>>, reqwest::Error> {
        send_json(self.http.get(self.url("/tracks"))).await
    }

    /// Fetches one track, `GET /tracks/{id}`.
    ///
    /// # Errors
    ///
    /// An unknown id surfaces as an error whose `status()` is `404 Not Found`.
    pub async fn get_track(&self, id: u64) -> Result<ApiResponse<Track>, reqwest::Error> {
        send_json(self.http.get(self.url(&track_path(id)))).await
    }

    /// Creates a track, `POST /tracks`, and returns the stored record with its
    /// backend-assigned id.
    ///
    /// # Example
    ///
    /// ```
    /// let created = client
    ///     .create_track(&NewTrack {
    ///         name: "Laguna Seca".to_string(),
    ///         location: Some("Monterey".to_string()),
    ///     })
    ///     .await?
    ///     .data;
    /// println!("created track {}", created.id);
    /// ```
    pub async fn create_track(&self, track: &NewTrack) -> Result<ApiResponse<Track>, reqwest::Error> {
        send_json(self.http.post(self.url("/tracks")).json(track)).await
    }

    /// Partially updates a track, `PATCH /tracks/{id}`.
    ///
    /// Only the fields set in `update` are sent, so the backend leaves every
    /// other field untouched.
    ///
    /// # Arguments
    ///
    /// * `id` - Track to change
    /// * `update` - Fields to overwrite; `None` fields are left out of the body
    ///
    /// # Returns
    ///
    /// The track as stored after the update.
    pub async fn update_track(
        &self,
        id: u64,
        update: &TrackUpdate,
    ) -> Result<ApiResponse<Track>, reqwest::Error> {
        send_json(self.http.patch(self.url(&track_path(id))).json(update)).await
    }

    /// Deletes a track, `DELETE /tracks/{id}`. Only the status is reported.
    pub async fn delete_track(&self, id: u64) -> Result<ApiResponse<()>, reqwest::Error> {
        send_empty(self.http.delete(self.url(&track_path(id)))).await
    }

    /// Searches tracks by case-insensitive substring, `GET /tracks/search`.
    ///
    /// Filters left as `None` are not sent; with no filters every track matches.
    pub async fn search_tracks(
        &self,
        query: &TrackQuery,
    ) -> Result<ApiResponse<Vec<Track>>, reqwest::Error> {
        send_json(self.http.get(self.url("/tracks/search")).query(query)).await
    }

    /// Lists the links attached to a track, `GET /tracks/{track_id}/links`.
    ///
    /// # Arguments
    ///
    /// * `track_id` - Owning track
    ///
    /// # Returns
    ///
    /// The links in backend order; empty when the track has none.
    ///
    /// # Errors
    ///
    /// `404 Not Found` when the track does not exist, plus transport failures.
    pub async fn get_track_links(
        &self,
        track_id: u64,
    ) -> Result<ApiResponse<Vec<TrackLink>>, reqwest::Error> {
        send_json(self.http.get(self.url(&links_path(track_id)))).await
    }

    /// Attaches a link to a track, `POST /tracks/{track_id}/links`.
    ///
    /// # Arguments
    ///
    /// * `track_id` - Owning track
    /// * `link` - Link type (e.g. `youtube`, `spotify`) and URL
    ///
    /// # Returns
    ///
    /// The stored link with its backend-assigned id, status `201 Created`.
    ///
    /// # Errors
    ///
    /// `404 Not Found` for an unknown track, `400 Bad Request` for missing fields.
    pub async fn create_track_link(
        &self,
        track_id: u64,
        link: &NewTrackLink,
    ) -> Result<ApiResponse<TrackLink>, reqwest::Error> {
        send_json(self.http.post(self.url(&links_path(track_id))).json(link)).await
    }

    /// Partially updates a link, `PATCH /tracks/{track_id}/links/{link_id}`.
    ///
    /// # Arguments
    ///
    /// * `track_id` - Owning track
    /// * `link_id` - Link to change
    /// * `update` - Fields to overwrite; `None` fields are not sent
    ///
    /// # Returns
    ///
    /// The link as stored after the update.
    ///
    /// # Errors
    ///
    /// `404 Not Found` when the link does not exist or belongs to another track.
    pub async fn update_track_link(
        &self,
        track_id: u64,
        link_id: u64,
        update: &TrackLinkUpdate,
    ) -> Result<ApiResponse<TrackLink>, reqwest::Error> {
        send_json(
            self.http
                .patch(self.url(&link_path(track_id, link_id)))
                .json(update),
        )
        .await
    }

    /// Removes a link, `DELETE /tracks/{track_id}/links/{link_id}`.
    ///
    /// # Returns
    ///
    /// Status and headers only; the confirmation body is discarded.
    ///
    /// # Errors
    ///
    /// `404 Not Found` when the link does not exist or belongs to another track.
    pub async fn delete_track_link(
        &self,
        track_id: u64,
        link_id: u64,
    ) -> Result<ApiResponse<()>, reqwest::Error> {
        send_empty(self.http.delete(self.url(&link_path(track_id, link_id)))).await
    }
}

fn track_path(id: u64) -> String {
    format!("/tracks/{id}")
}

fn links_path(track_id: u64) -> String {
    format!("/tracks/{track_id}/links")
}

fn link_path(track_id: u64, link_id: u64) -> String {
    format!("/tracks/{track_id}/links/{link_id}")
}
