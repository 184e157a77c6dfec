pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub menu_item_id: Option<String>,
        #[serde(default, deserialize_with = "validation::deserialize_string_or_number")]
        pub quantity: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::cart::repository::CartItem, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        ItemAdded(CartItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemAdded(item) => (StatusCode::CREATED, Json(item)).into_response(),
            }
        }
    }

    pub enum Error {
        MenuItemIdRequired,
        InvalidQuantity,
        QuantityTooLarge,
        MenuItemNotFound,
        MenuItemNotAvailable,
        FailedToAddItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemIdRequired => {
                    response::message(StatusCode::BAD_REQUEST, "menu_item_id required")
                }
                Self::InvalidQuantity => {
                    response::message(StatusCode::BAD_REQUEST, "quantity must be > 0")
                }
                Self::QuantityTooLarge => {
                    response::message(StatusCode::BAD_REQUEST, "quantity is too large")
                }
                Self::MenuItemNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Menu item not found")
                }
                Self::MenuItemNotAvailable => {
                    response::message(StatusCode::BAD_REQUEST, "Menu item is not available")
                }
                Self::FailedToAddItem => {
                    response::unexpected("DatabaseError", "Failed to add item to cart")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
