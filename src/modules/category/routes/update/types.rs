pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub name: Option<String>,
        pub is_active: Option<bool>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::category::repository::Category, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        CategoryUpdated(Category),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryUpdated(category) => (StatusCode::OK, Json(category)).into_response(),
            }
        }
    }

    pub enum Error {
        NameEmpty,
        NothingToUpdate,
        CategoryNotFound,
        NameAlreadyExists,
        FailedToUpdateCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NameEmpty => response::message(StatusCode::BAD_REQUEST, "name cannot be empty"),
                Self::NothingToUpdate => {
                    response::message(StatusCode::BAD_REQUEST, "Nothing to update")
                }
                Self::CategoryNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Category not found")
                }
                Self::NameAlreadyExists => {
                    response::message(StatusCode::CONFLICT, "Category name already exists")
                }
                Self::FailedToUpdateCategory => {
                    response::unexpected("DatabaseError", "Failed to update category")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
