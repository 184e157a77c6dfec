pub mod response {
    use crate::{modules::category::repository::Category, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CategoryDeactivated(Category),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryDeactivated(category) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Category deactivated", "category": category })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        CategoryNotFound,
        FailedToDeactivateCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Category not found")
                }
                Self::FailedToDeactivateCategory => {
                    response::unexpected("DatabaseError", "Failed to deactivate category")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
