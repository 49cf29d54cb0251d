//! # API Module
//!
//! Request handlers of the in-memory development backend. They implement the
//! same REST contract the client in [`crate::client`] consumes, so the CLI and
//! the integration tests can run without the real backend.
//!
//! ## Endpoints
//!
//! ### Monitoring
//!
//! - [`health`] - static liveness message
//!
//! ### Users
//!
//! - [`register`] - `POST /register`, 400 on missing fields, 409 on duplicates
//! - [`login`] - `POST /login`, issues an opaque bearer token
//! - [`users`] - `GET /users`, requires a valid bearer token
//!
//! ### Tracks
//!
//! - [`list_tracks`], [`get_track`], [`create_track`], [`update_track`],
//!   [`delete_track`] - CRUD over `/tracks`
//! - [`search_tracks`] - case-insensitive substring search on name and location
//! - [`list_links`], [`create_link`], [`update_link`], [`delete_link`] - links
//!   nested under `/tracks/{id}/links`
//!
//! `Store::seed` loads a small demo data set (two users, five tracks, four
//! links) for `racerx serve --seed`.
//!
//! All state lives in a [`SharedStore`] handed to the handlers through an
//! `Extension` layer. Failures are returned as [`ApiError`], which renders as
//! `{"error": "..."}` with the matching status code.

mod health;
mod seed;
mod store;
mod tracks;
mod users;

pub use health::health;
pub use store::{ApiError, SharedStore, Store};
pub use tracks::{
    create_link, create_track, delete_link, delete_track, get_track, list_links, list_tracks,
    search_tracks, update_link, update_track,
};
pub use users::{login, register, users};
