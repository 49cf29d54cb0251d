use axum::response::Json;

use crate::types::Health;

pub async fn health() -> Json<Health> {
    Json(Health {
        status: Some("healthy".to_string()),
        message: "Racer X is running".to_string(),
    })
}
