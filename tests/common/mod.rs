#![allow(dead_code)]

use axum::Router;
use racerx::{client::ApiClient, server};
use tokio::net::TcpListener;

/// Starts a fresh development backend on an ephemeral port and returns a
/// client pointed at its `/api` prefix.
pub async fn spawn_backend() -> ApiClient {
    spawn_router(server::app()).await
}

/// Like [`spawn_backend`], but pre-filled with the demo data.
pub async fn spawn_seeded_backend() -> ApiClient {
    spawn_router(server::seeded_app()).await
}

/// Serves an arbitrary router on an ephemeral port, for partial backends.
pub async fn spawn_router(app: Router) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(format!("http://{}/api", addr)).unwrap()
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ApiClient::new(format!("http://{}/api", addr)).unwrap()
}
