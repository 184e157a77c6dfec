mod cancelled_orders;
mod orders;
mod update_order_status;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(orders::get_router())
        .merge(cancelled_orders::get_router())
        .merge(update_order_status::get_router())
}
