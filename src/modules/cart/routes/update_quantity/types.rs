pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        #[serde(default, deserialize_with = "validation::deserialize_string_or_number")]
        pub quantity: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub menu_item_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::cart::repository::CartItem, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        QuantityUpdated(CartItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::QuantityUpdated(item) => (StatusCode::OK, Json(item)).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidQuantity,
        CartNotFound,
        ItemNotFound,
        FailedToUpdateQuantity,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidQuantity => {
                    response::message(StatusCode::BAD_REQUEST, "quantity must be > 0")
                }
                Self::CartNotFound => response::message(StatusCode::NOT_FOUND, "Cart not found"),
                Self::ItemNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Item not found in cart")
                }
                Self::FailedToUpdateQuantity => {
                    response::unexpected("DatabaseError", "Failed to update cart item")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
