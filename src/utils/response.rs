use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Attached to 500 responses so the error log middleware can persist the failure.
#[derive(Clone, Debug)]
pub struct ErrorRecord {
    pub kind: String,
    pub message: String,
}

pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "message": message.into() }))).into_response()
}

pub fn unexpected(kind: impl Into<String>, detail: impl Into<String>) -> Response {
    let mut res = message(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
    res.extensions_mut().insert(ErrorRecord {
        kind: kind.into(),
        message: detail.into(),
    });
    res
}
