use tabled::Table;

use crate::{
    client::ApiClient,
    info, success,
    types::{NewTrackLink, TrackLinkTableRow, TrackLinkUpdate},
    warning,
};

pub async fn list(client: &ApiClient, track_id: u64) {
    match client.get_track_links(track_id).await {
        Ok(response) if response.data.is_empty() => {
            info!("Track {} has no links.", track_id)
        }
        Ok(response) => {
            let rows: Vec<TrackLinkTableRow> =
                response.data.iter().map(TrackLinkTableRow::from).collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => warning!("Failed to fetch links for track {}. Err: {}", track_id, e),
    }
}

pub async fn add(client: &ApiClient, track_id: u64, link_type: String, link_url: String) {
    let link = NewTrackLink {
        link_type,
        link_url,
    };

    match client.create_track_link(track_id, &link).await {
        Ok(response) => success!(
            "Link {} added to track {}.",
            response.data.id,
            response.data.track_id
        ),
        Err(e) => warning!("Failed to add link to track {}. Err: {}", track_id, e),
    }
}

pub async fn update(
    client: &ApiClient,
    track_id: u64,
    link_id: u64,
    link_type: Option<String>,
    link_url: Option<String>,
) {
    let update = TrackLinkUpdate {
        link_type,
        link_url,
    };

    match client.update_track_link(track_id, link_id, &update).await {
        Ok(response) => success!(
            "Link {} updated: {} {}",
            link_id,
            response.data.link_type,
            response.data.link_url
        ),
        Err(e) => warning!("Failed to update link {}. Err: {}", link_id, e),
    }
}

pub async fn delete(client: &ApiClient, track_id: u64, link_id: u64) {
    match client.delete_track_link(track_id, link_id).await {
        Ok(_) => success!("Link {} removed from track {}.", link_id, track_id),
        Err(e) => warning!("Failed to delete link {}. Err: {}", link_id, e),
    }
}
