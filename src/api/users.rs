use axum::{
    Extension, Json,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};
use serde::Deserialize;

use crate::types::{LoginResponse, MessageResponse, User};

use super::store::{ApiError, SharedStore, StoredUser, hash_password, now, random_string};

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    email: Option<String>,
    password: Option<String>,
}

pub async fn register(
    Extension(store): Extension<SharedStore>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (Some(username), Some(email), Some(password)) = (
        non_empty(body.username),
        non_empty(body.email),
        non_empty(body.password),
    ) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let mut store = store.lock().await;
    if store.username_or_email_taken(&username, &email) {
        return Err(ApiError::new(
            StatusCode::CONFLICT,
            "Username or email already exists",
        ));
    }

    let id = store.next_id();
    let salt = random_string(16);
    let password_hash = hash_password(&salt, &password);
    store.users.insert(
        id,
        StoredUser {
            user: User {
                id,
                username,
                email,
                created_at: Some(now()),
            },
            salt,
            password_hash,
        },
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

pub async fn login(
    Extension(store): Extension<SharedStore>,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (non_empty(body.email), non_empty(body.password)) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let mut store = store.lock().await;
    let user_id = match store.find_user_by_email(&email) {
        Some(stored) if hash_password(&stored.salt, &password) == stored.password_hash => {
            stored.user.id
        }
        _ => return Err(ApiError::unauthorized("Invalid email or password")),
    };

    let access_token = store.issue_token(user_id);
    Ok(Json(LoginResponse { access_token }))
}

pub async fn users(
    Extension(store): Extension<SharedStore>,
    headers: HeaderMap,
) -> Result<Json<Vec<User>>, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization Header"))?;

    let store = store.lock().await;
    if store.user_for_token(token).is_none() {
        return Err(ApiError::unauthorized("Invalid token"));
    }

    Ok(Json(store.users.values().map(|u| u.user.clone()).collect()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
