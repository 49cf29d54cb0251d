use axum::{
    Extension, Router,
    routing::{get, patch, post},
};
use tokio::net::TcpListener;

use crate::{
    api::{self, SharedStore, Store},
    config::DEFAULT_API_PREFIX,
};

/// Builds the development backend with a fresh, empty store.
pub fn app() -> Router {
    app_with_store(Store::shared())
}

/// Builds the development backend around an existing store. Every route is
/// nested under `/api`.
pub fn app_with_store(store: SharedStore) -> Router {
    let routes = Router::new()
        .route("/health", get(api::health))
        .route("/register", post(api::register))
        .route("/login", post(api::login))
        .route("/users", get(api::users))
        .route("/tracks", get(api::list_tracks).post(api::create_track))
        .route("/tracks/search", get(api::search_tracks))
        .route(
            "/tracks/{id}",
            get(api::get_track)
                .patch(api::update_track)
                .put(api::update_track)
                .delete(api::delete_track),
        )
        .route(
            "/tracks/{id}/links",
            get(api::list_links).post(api::create_link),
        )
        .route(
            "/tracks/{id}/links/{link_id}",
            patch(api::update_link)
                .put(api::update_link)
                .delete(api::delete_link),
        )
        .layer(Extension(store));

    Router::new().nest(DEFAULT_API_PREFIX, routes)
}

/// Builds the development backend pre-filled with the demo data.
pub fn seeded_app() -> Router {
    app_with_store(Store::seeded())
}

/// Serves the development backend on an already bound listener.
pub async fn serve(listener: TcpListener, seed: bool) -> std::io::Result<()> {
    let app = if seed { seeded_app() } else { app() };
    axum::serve(listener, app).await
}

/// Binds `addr` and serves the development backend until the process exits.
pub async fn start_api_server(addr: &str, seed: bool) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, seed).await
}
