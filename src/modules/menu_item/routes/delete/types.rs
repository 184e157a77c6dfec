pub mod response {
    use crate::utils::response;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MenuItemDeactivated(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemDeactivated(id) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Deleted (soft)", "id": id })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MenuItemNotFound,
        FailedToDeactivateMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Menu item not found")
                }
                Self::FailedToDeactivateMenuItem => {
                    response::unexpected("DatabaseError", "Failed to delete menu item")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
