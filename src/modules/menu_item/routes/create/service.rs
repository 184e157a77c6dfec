use super::types::{request, response};
use crate::{
    modules::{menu_item::repository, storage},
    types::Context,
    utils::validation::present,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, body: request::Body) -> response::Response {
    let (restaurant_id, category_id, name, price) = match (
        present(&body.restaurant_id),
        present(&body.category_id),
        present(&body.name),
        present(&body.price),
    ) {
        (Some(restaurant_id), Some(category_id), Some(name), Some(price)) => (
            restaurant_id.to_string(),
            category_id.to_string(),
            name.to_string(),
            price,
        ),
        _ => return Err(response::Error::MissingFields),
    };

    let price = repository::parse_price(price).map_err(|_| response::Error::InvalidPrice)?;

    let image_path = match &body.image {
        Some(image) => Some(
            storage::upload_file(
                &ctx.storage,
                image.metadata.content_type.as_deref(),
                image.contents.path(),
            )
            .await
            .map_err(|err| match err {
                storage::Error::UnsupportedFileType => response::Error::UnsupportedImageType,
                storage::Error::FileTooLarge => response::Error::ImageTooLarge,
                storage::Error::UploadFailed => response::Error::FailedToUploadImage,
            })?,
        ),
        None => None,
    };

    let created = repository::create(
        &ctx.db_conn.pool,
        repository::CreateMenuItemPayload {
            restaurant_id,
            category_id,
            name,
            description: present(&body.description).map(|d| d.to_string()),
            price,
            image_path: image_path.clone(),
        },
    )
    .await;

    match created {
        Ok(item) => Ok(response::Success::MenuItemCreated(item)),
        Err(err) => {
            if let Some(image_path) = image_path {
                storage::delete_file(&ctx.storage, &image_path).await;
            }
            Err(match err {
                repository::Error::ReferenceNotFound => response::Error::ReferenceNotFound,
                repository::Error::UnexpectedError => response::Error::FailedToCreateMenuItem,
            })
        }
    }
}
