mod add;
mod get;
mod remove;
mod update_quantity;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(add::get_router())
        .merge(get::get_router())
        .merge(update_quantity::get_router())
        .merge(remove::get_router())
}
