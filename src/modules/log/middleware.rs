use super::repository;
use crate::{
    modules::auth::{middleware::bearer_token, service::token},
    types::Context,
    utils::response::ErrorRecord,
};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Persists the `ErrorRecord` of every unexpected failure. The write happens
/// off the request path and its outcome never alters the response.
pub async fn record_errors(
    State(ctx): State<Arc<Context>>,
    req: Request,
    next: Next,
) -> Response {
    let endpoint = req.uri().path().to_string();
    let user_id = bearer_token(req.headers())
        .and_then(|token| token::verify(&ctx.auth, &token).ok())
        .map(|claims| claims.id);

    let res = next.run(req).await;

    if let Some(record) = res.extensions().get::<ErrorRecord>().cloned() {
        tracing::error!(
            "{} on {}: {}",
            record.kind,
            endpoint,
            record.message
        );

        let pool = ctx.db_conn.pool.clone();
        tokio::spawn(async move {
            let _ = repository::create(
                &pool,
                repository::CreateLogPayload {
                    error_type: record.kind,
                    message: record.message,
                    endpoint,
                    user_id,
                },
            )
            .await;
        });
    }

    res
}
