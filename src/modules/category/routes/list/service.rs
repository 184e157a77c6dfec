use super::types::{request, response};
use crate::{modules::category::repository, types::Context, utils::validation};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let all = validation::is_true(&payload.filters.all);

    if all && !payload.auth.is_admin() {
        return Err(response::Error::AdminOnly);
    }

    repository::find_many(&ctx.db_conn.pool, all)
        .await
        .map_err(|_| response::Error::FailedToFetchCategories)
        .map(response::Success::Categories)
}
