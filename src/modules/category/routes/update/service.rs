use super::types::{request, response};
use crate::{modules::category::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let name = match payload.body.name {
        Some(name) if name.trim().is_empty() => return Err(response::Error::NameEmpty),
        name => name.map(|name| name.trim().to_string()),
    };

    if name.is_none() && payload.body.is_active.is_none() {
        return Err(response::Error::NothingToUpdate);
    }

    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.id,
        repository::UpdateCategoryPayload {
            name,
            is_active: payload.body.is_active,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::NameAlreadyExists => response::Error::NameAlreadyExists,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateCategory,
    })?
    .ok_or(response::Error::CategoryNotFound)
    .map(response::Success::CategoryUpdated)
}
