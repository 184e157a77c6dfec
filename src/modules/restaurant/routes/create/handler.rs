use super::{service::service, types::request};
use crate::{modules::auth::middleware::AdminAuth, types::Context, utils::validation::Json};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(ctx, body).await
}
