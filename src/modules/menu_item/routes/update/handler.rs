use super::{service::service, types::request};
use crate::{modules::auth::middleware::AdminAuth, types::Context, utils::validation};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_typed_multipart::{TypedMultipart, TypedMultipartError};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    Path(id): Path<String>,
    body: Result<TypedMultipart<request::Body>, TypedMultipartError>,
) -> Response {
    match body {
        Ok(TypedMultipart(body)) => service(ctx, request::Payload { id, body })
            .await
            .into_response(),
        Err(err) => validation::multipart_rejection(err),
    }
}
