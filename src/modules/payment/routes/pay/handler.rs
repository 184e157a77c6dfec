use super::{service::service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context, utils::validation::Json};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    Path(order_id): Path<String>,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            auth,
            order_id,
            body,
        },
    )
    .await
}
