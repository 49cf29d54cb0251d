use tabled::Table;

use crate::{
    client::ApiClient,
    info,
    management::{Dashboard, render_tracks},
    success,
    types::{NewTrack, TrackQuery, TrackTableRow, TrackUpdate},
    utils, warning,
};

/// Shows the tracks overview: backend health and the full track list.
///
/// Both requests are issued at once. Either may fail without hiding the result
/// of the other; failures only produce a warning.
pub async fn overview(client: &ApiClient) {
    let pb = utils::spinner("Loading tracks...");
    let dashboard = Dashboard::load(client).await;
    pb.finish_and_clear();

    if let Some(message) = &dashboard.health {
        info!("Backend: {}", message);
    }
    println!("{}", dashboard.render_tracks());
}

pub async fn health(client: &ApiClient) {
    match client.health_check().await {
        Ok(response) => {
            success!("{}", response.data.message);
            if let Some(status) = response.data.status {
                info!("Status: {}", status);
            }
        }
        Err(e) => warning!("Health check failed. Err: {}", e),
    }
}

pub async fn get(client: &ApiClient, id: u64) {
    match client.get_track(id).await {
        Ok(response) => print_track_table(&[response.data]),
        Err(e) => warning!("Failed to fetch track {}. Err: {}", id, e),
    }
}

pub async fn create(client: &ApiClient, name: String, location: Option<String>) {
    let track = NewTrack {
        name,
        location: utils::non_empty(location),
    };

    match client.create_track(&track).await {
        Ok(response) => {
            success!("Track {} created.", response.data.id);
            print_track_table(&[response.data]);
        }
        Err(e) => warning!("Failed to create track. Err: {}", e),
    }
}

pub async fn update(client: &ApiClient, id: u64, name: Option<String>, location: Option<String>) {
    let update = TrackUpdate { name, location };
    if update.name.is_none() && update.location.is_none() {
        info!("Nothing to update here.");
        return;
    }

    match client.update_track(id, &update).await {
        Ok(response) => {
            success!("Track {} updated.", id);
            print_track_table(&[response.data]);
        }
        Err(e) => warning!("Failed to update track {}. Err: {}", id, e),
    }
}

pub async fn delete(client: &ApiClient, id: u64) {
    match client.delete_track(id).await {
        Ok(response) => success!("Track {} deleted ({}).", id, response.status),
        Err(e) => warning!("Failed to delete track {}. Err: {}", id, e),
    }
}

pub async fn search(client: &ApiClient, name: Option<String>, location: Option<String>) {
    let query = TrackQuery {
        name: utils::non_empty(name),
        location: utils::non_empty(location),
    };

    match client.search_tracks(&query).await {
        Ok(response) => println!("{}", render_tracks(&response.data)),
        Err(e) => warning!("Search failed. Err: {}", e),
    }
}

fn print_track_table(tracks: &[crate::types::Track]) {
    let rows: Vec<TrackTableRow> = tracks.iter().map(TrackTableRow::from).collect();
    println!("{}", Table::new(rows));
}
