use super::types::{request, response};
use crate::{modules::menu_item::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let is_admin = payload.auth.as_ref().is_some_and(|auth| auth.is_admin());

    repository::find_with_names_by_id(&ctx.db_conn.pool, payload.id, is_admin)
        .await
        .map_err(|_| response::Error::FailedToFetchMenuItem)?
        .ok_or(response::Error::MenuItemNotFound)
        .map(response::Success::MenuItem)
}
