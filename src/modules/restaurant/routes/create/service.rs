use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context, utils::validation::present};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, body: request::Body) -> response::Response {
    let name = present(&body.name)
        .map(|name| name.to_string())
        .ok_or(response::Error::NameRequired)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateRestaurantPayload {
            owner_user_id: present(&body.owner_user_id).map(|id| id.to_string()),
            name,
            description: body.description,
            address: body.address,
            phone: body.phone,
            image_path: body.image_path,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::OwnerNotFound => response::Error::OwnerNotFound,
        repository::Error::UnexpectedError => response::Error::FailedToCreateRestaurant,
    })
    .map(response::Success::RestaurantCreated)
}
