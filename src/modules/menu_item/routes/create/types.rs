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
        #[form_data(limit = "3MiB")]
        pub image: Option<FieldData<NamedTempFile>>,
    }
}

pub mod response {
    use crate::{modules::menu_item::repository::MenuItem, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        MenuItemCreated(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemCreated(item) => (StatusCode::CREATED, Json(item)).into_response(),
            }
        }
    }

    pub enum Error {
        MissingFields,
        InvalidPrice,
        UnsupportedImageType,
        ImageTooLarge,
        ReferenceNotFound,
        FailedToUploadImage,
        FailedToCreateMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFields => response::message(
                    StatusCode::BAD_REQUEST,
                    "restaurant_id, category_id, name, price are required",
                ),
                Self::InvalidPrice => response::message(
                    StatusCode::BAD_REQUEST,
                    "price must be a non-negative number",
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
                Self::FailedToCreateMenuItem => {
                    response::unexpected("DatabaseError", "Failed to create menu item")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
