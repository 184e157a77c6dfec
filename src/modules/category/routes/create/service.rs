use super::types::{request, response};
use crate::{modules::category::repository, types::Context, utils::validation::present};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, body: request::Body) -> response::Response {
    let name = present(&body.name)
        .map(|name| name.to_string())
        .ok_or(response::Error::NameRequired)?;

    repository::create(&ctx.db_conn.pool, name)
        .await
        .map_err(|err| match err {
            repository::Error::NameAlreadyExists => response::Error::NameAlreadyExists,
            repository::Error::UnexpectedError => response::Error::FailedToCreateCategory,
        })
        .map(response::Success::CategoryCreated)
}
