use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use serde_json::json;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

use crate::types::{Track, TrackLink, User};

pub type SharedStore = Arc<Mutex<Store>>;

/// Error returned by backend handlers, rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub struct StoredUser {
    pub user: User,
    pub salt: String,
    pub password_hash: String,
}

/// In-memory state of the development backend.
#[derive(Default)]
pub struct Store {
    next_id: u64,
    pub users: BTreeMap<u64, StoredUser>,
    pub tokens: BTreeMap<String, u64>,
    pub tracks: BTreeMap<u64, Track>,
    pub links: BTreeMap<u64, TrackLink>,
}

impl Store {
    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Store::default()))
    }

    /// Ids are unique across every record kind.
    pub fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&StoredUser> {
        self.users.values().find(|u| u.user.email == email)
    }

    pub fn username_or_email_taken(&self, username: &str, email: &str) -> bool {
        self.users
            .values()
            .any(|u| u.user.username == username || u.user.email == email)
    }

    pub fn issue_token(&mut self, user_id: u64) -> String {
        let nonce = random_string(32);
        let token = digest(&format!("{user_id}:{nonce}"));
        self.tokens.insert(token.clone(), user_id);
        token
    }

    pub fn user_for_token(&self, token: &str) -> Option<&User> {
        self.tokens
            .get(token)
            .and_then(|id| self.users.get(id))
            .map(|u| &u.user)
    }

    pub fn track(&self, id: u64) -> Result<&Track, ApiError> {
        self.tracks
            .get(&id)
            .ok_or_else(|| ApiError::not_found(format!("Track {id} not found")))
    }

    pub fn track_mut(&mut self, id: u64) -> Result<&mut Track, ApiError> {
        self.tracks
            .get_mut(&id)
            .ok_or_else(|| ApiError::not_found(format!("Track {id} not found")))
    }

    pub fn link_mut(&mut self, track_id: u64, link_id: u64) -> Result<&mut TrackLink, ApiError> {
        self.links
            .get_mut(&link_id)
            .filter(|l| l.track_id == track_id)
            .ok_or_else(|| ApiError::not_found(format!("Link {link_id} not found")))
    }
}

pub fn now() -> String {
    Utc::now().to_rfc3339()
}

pub fn hash_password(salt: &str, password: &str) -> String {
    digest(&format!("{salt}{password}"))
}

pub fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn digest(input: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(input.as_bytes()))
}
