use super::types::response;
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many_with_user_email(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)
        .map(response::Success::Orders)
}
