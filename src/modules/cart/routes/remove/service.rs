use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, cart::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, menu_item_id: String) -> response::Response {
    let cart = repository::find_by_user_id(&ctx.db_conn.pool, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToRemoveItem)?
        .ok_or(response::Error::CartNotFound)?;

    match repository::delete_item(&ctx.db_conn.pool, cart.id, menu_item_id).await {
        Ok(true) => Ok(response::Success::ItemRemoved),
        Ok(false) => Err(response::Error::ItemNotFound),
        Err(_) => Err(response::Error::FailedToRemoveItem),
    }
}
