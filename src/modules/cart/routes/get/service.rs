use super::types::response;
use crate::{
    modules::{
        auth::middleware::Auth,
        cart::{repository, service::total},
    },
    types::Context,
};
use sqlx::types::BigDecimal;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    let cart = repository::find_by_user_id(&ctx.db_conn.pool, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    let Some(cart) = cart else {
        return Ok(response::Success::Cart(response::CartView {
            cart_id: None,
            items: vec![],
            total_amount: BigDecimal::from(0),
        }));
    };

    let items = repository::find_lines_by_cart_id(&ctx.db_conn.pool, cart.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?;

    Ok(response::Success::Cart(response::CartView {
        cart_id: Some(cart.id),
        total_amount: total(&items),
        items,
    }))
}
