use super::types::{request, response};
use crate::{
    modules::{menu_item::repository, storage},
    types::Context,
    utils::validation::present,
};
use std::sync::Arc;

fn parse_availability(raw: &str) -> Result<bool, response::Error> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(response::Error::InvalidAvailability),
    }
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let body = payload.body;

    let existing = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateMenuItem)?
        .ok_or(response::Error::MenuItemNotFound)?;

    let price = present(&body.price)
        .map(repository::parse_price)
        .transpose()
        .map_err(|_| response::Error::InvalidPrice)?;

    let is_available = present(&body.is_available)
        .map(parse_availability)
        .transpose()?;

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

    let updated = repository::update_by_id(
        &ctx.db_conn.pool,
        existing.id,
        repository::UpdateMenuItemPayload {
            restaurant_id: present(&body.restaurant_id).map(|id| id.to_string()),
            category_id: present(&body.category_id).map(|id| id.to_string()),
            name: present(&body.name).map(|name| name.to_string()),
            description: present(&body.description).map(|d| d.to_string()),
            price,
            image_path: image_path.clone(),
            is_available,
        },
    )
    .await;

    match updated {
        Ok(Some(item)) => {
            if let (Some(_), Some(previous)) = (&image_path, &existing.image_path) {
                storage::delete_file(&ctx.storage, previous).await;
            }
            Ok(response::Success::MenuItemUpdated(item))
        }
        Ok(None) => {
            if let Some(image_path) = image_path {
                storage::delete_file(&ctx.storage, &image_path).await;
            }
            Err(response::Error::MenuItemNotFound)
        }
        Err(err) => {
            if let Some(image_path) = image_path {
                storage::delete_file(&ctx.storage, &image_path).await;
            }
            Err(match err {
                repository::Error::ReferenceNotFound => response::Error::ReferenceNotFound,
                repository::Error::UnexpectedError => response::Error::FailedToUpdateMenuItem,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_accepts_form_booleans() {
        assert!(matches!(parse_availability("TRUE"), Ok(true)));
        assert!(matches!(parse_availability("0"), Ok(false)));
        assert!(matches!(
            parse_availability("maybe"),
            Err(response::Error::InvalidAvailability)
        ));
    }
}
