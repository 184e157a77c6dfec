mod get;
mod pay;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(get::get_router())
        .merge(pay::get_router())
}
