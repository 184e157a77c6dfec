use super::types::response;
use crate::{
    modules::order::repository::{self, OrderStatus},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many_by_status(&ctx.db_conn.pool, OrderStatus::Cancelled)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)
        .map(response::Success::Orders)
}
