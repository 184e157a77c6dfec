pub mod request {
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        pub restaurant_id: Option<String>,
        pub category_id: Option<String>,
        pub name: Option<String>,
        pub description: Option<String>,
        pub price: Option<String>,
        pub is_available: Option<String>,
        #[form_data(limit = "3MiB")]
        pub image: Option<FieldData<NamedTempFile>>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::menu_item::repository::MenuItem, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        MenuItemUpdated(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemUpdated(item) => (StatusCode::OK, Json(item)).into_response(),
            }
        }
    }

    pub enum Error {
        MenuItemNotFound,
        InvalidPrice,
        InvalidAvailability,
        UnsupportedImageType,
        ImageTooLarge,
        ReferenceNotFound,
        FailedToUploadImage,
        FailedToUpdateMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Menu item not found")
                }
                Self::InvalidPrice => response::message(
                    StatusCode::BAD_REQUEST,
                    "price must be a non-negative number",
                ),
                Self::InvalidAvailability => response::message(
                    StatusCode::BAD_REQUEST,
                    "is_available must be true or false",
                ),
                Self::UnsupportedImageType => response::message(
                    StatusCode::BAD_REQUEST,
                    "Only image files are allowed (jpg/png/webp)",
                ),
                Self::ImageTooLarge => response::message(StatusCode::BAD_REQUEST, "File too large"),
                Self::ReferenceNotFound => response::message(
                    StatusCode::CONFLICT,
                    "restaurant_id or category_id not found",
                ),
                Self::FailedToUploadImage => {
                    response::unexpected("StorageError", "Failed to store uploaded image")
                }
                Self::FailedToUpdateMenuItem => {
                    response::unexpected("DatabaseError", "Failed to update menu item")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
