use super::types::{request, response};
use crate::{
    modules::cart::{repository, service::parse_quantity},
    types::Context,
    utils::validation::present,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let quantity = present(&payload.body.quantity)
        .and_then(parse_quantity)
        .ok_or(response::Error::InvalidQuantity)?;

    let cart = repository::find_by_user_id(&ctx.db_conn.pool, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateQuantity)?
        .ok_or(response::Error::CartNotFound)?;

    repository::update_item_quantity(&ctx.db_conn.pool, cart.id, payload.menu_item_id, quantity)
        .await
        .map_err(|_| response::Error::FailedToUpdateQuantity)?
        .ok_or(response::Error::ItemNotFound)
        .map(response::Success::QuantityUpdated)
}
