use crate::{error, info, server};

pub async fn serve(addr: String, seed: bool) {
    info!("Serving the Racer X development backend on http://{}/api", addr);
    if seed {
        info!("Loaded demo users, tracks and links.");
    }

    if let Err(e) = server::start_api_server(&addr, seed).await {
        error!("Failed to run backend on {}: {}", addr, e);
    }
}
