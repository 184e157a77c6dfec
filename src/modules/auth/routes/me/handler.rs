use crate::modules::auth::middleware::Auth;
use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn handler(auth: Auth) -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "ok": true, "user": auth.user })))
}
