use super::types::{request, response};
use crate::{
    modules::menu_item::repository,
    types::Context,
    utils::validation::{self, present},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let all = validation::is_true(&payload.filters.all);
    let is_admin = payload.auth.as_ref().is_some_and(|auth| auth.is_admin());

    if all && !is_admin {
        return Err(response::Error::AdminOnly);
    }

    repository::find_many(
        &ctx.db_conn.pool,
        repository::FindManyFilters {
            restaurant_id: present(&payload.filters.restaurant_id).map(|id| id.to_string()),
            category_id: present(&payload.filters.category_id).map(|id| id.to_string()),
            include_unavailable: all,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchMenuItems)
    .map(response::Success::MenuItems)
}
