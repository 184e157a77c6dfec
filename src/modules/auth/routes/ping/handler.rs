use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "ok": true })))
}
