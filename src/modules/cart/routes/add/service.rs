use super::types::{request, response};
use crate::{
    modules::{
        cart::{repository, service::parse_quantity},
        menu_item,
    },
    types::Context,
    utils::validation::present,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let menu_item_id = present(&payload.body.menu_item_id)
        .map(|id| id.to_string())
        .ok_or(response::Error::MenuItemIdRequired)?;

    let quantity = match present(&payload.body.quantity) {
        Some(raw) => parse_quantity(raw).ok_or(response::Error::InvalidQuantity)?,
        None => 1,
    };

    let menu_item = menu_item::repository::find_by_id(&ctx.db_conn.pool, menu_item_id)
        .await
        .map_err(|_| response::Error::FailedToAddItem)?
        .ok_or(response::Error::MenuItemNotFound)?;

    if !menu_item.is_available {
        return Err(response::Error::MenuItemNotAvailable);
    }

    let cart = repository::find_or_create_by_user_id(&ctx.db_conn.pool, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToAddItem)?;

    repository::upsert_item(
        &ctx.db_conn.pool,
        repository::UpsertCartItemPayload {
            cart_id: cart.id,
            menu_item_id: menu_item.id,
            quantity,
            unit_price: menu_item.price,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToAddItem)?
    .ok_or(response::Error::QuantityTooLarge)
    .map(response::Success::ItemAdded)
}
