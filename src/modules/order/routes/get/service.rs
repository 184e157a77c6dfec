use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, order::repository, restaurant},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, id: String) -> response::Response {
    let order = repository::find_by_id_and_user_id(&ctx.db_conn.pool, id, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    let items = repository::find_items_by_order_id(&ctx.db_conn.pool, order.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?;

    let restaurant =
        restaurant::repository::find_by_id(&ctx.db_conn.pool, order.restaurant_id.clone())
            .await
            .map_err(|_| response::Error::FailedToFetchOrder)?;

    Ok(response::Success::Order(response::OrderDetail {
        order,
        items,
        restaurant,
    }))
}
