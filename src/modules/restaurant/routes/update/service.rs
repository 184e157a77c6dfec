use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let body = payload.body;

    let name = match body.name {
        Some(name) if name.trim().is_empty() => return Err(response::Error::NameEmpty),
        name => name.map(|name| name.trim().to_string()),
    };

    // An empty owner id detaches the restaurant from its owner.
    let owner_user_id = body
        .owner_user_id
        .map(|owner| owner.filter(|id| !id.trim().is_empty()));

    let update = repository::UpdateRestaurantPayload {
        owner_user_id,
        name,
        description: body.description,
        address: body.address,
        phone: body.phone,
        image_path: body.image_path,
        is_active: body.is_active,
    };

    if update.is_empty() {
        return Err(response::Error::NothingToUpdate);
    }

    repository::update_by_id(&ctx.db_conn.pool, payload.id, update)
        .await
        .map_err(|err| match err {
            repository::Error::OwnerNotFound => response::Error::OwnerNotFound,
            repository::Error::UnexpectedError => response::Error::FailedToUpdateRestaurant,
        })?
        .ok_or(response::Error::RestaurantNotFound)
        .map(response::Success::RestaurantUpdated)
}
