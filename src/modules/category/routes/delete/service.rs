use super::types::response;
use crate::{modules::category::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, id: String) -> response::Response {
    repository::deactivate_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::FailedToDeactivateCategory)?
        .ok_or(response::Error::CategoryNotFound)
        .map(response::Success::CategoryDeactivated)
}
