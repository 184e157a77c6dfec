pub mod response {
    use crate::utils::response;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ItemRemoved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemRemoved => {
                    (StatusCode::OK, Json(json!({ "message": "Removed" }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        CartNotFound,
        ItemNotFound,
        FailedToRemoveItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartNotFound => response::message(StatusCode::NOT_FOUND, "Cart not found"),
                Self::ItemNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Item not found in cart")
                }
                Self::FailedToRemoveItem => {
                    response::unexpected("DatabaseError", "Failed to remove cart item")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
