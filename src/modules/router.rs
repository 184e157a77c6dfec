use super::{admin, auth, cart, category, menu_item, order, payment, restaurant, user};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/auth", auth::get_router())
        .nest("/users", user::get_router())
        .nest("/restaurants", restaurant::get_router())
        .nest("/categories", category::get_router())
        .nest("/menu-items", menu_item::get_router())
        .nest("/cart", cart::get_router())
        .nest("/orders", order::get_router())
        .nest("/payments", payment::get_router())
        .nest("/admin", admin::get_router())
}
