pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub name: Option<String>,
    }
}

pub mod response {
    use crate::{modules::category::repository::Category, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        CategoryCreated(Category),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryCreated(category) => {
                    (StatusCode::CREATED, Json(category)).into_response()
                }
            }
        }
    }

    pub enum Error {
        NameRequired,
        NameAlreadyExists,
        FailedToCreateCategory,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NameRequired => response::message(StatusCode::BAD_REQUEST, "name is required"),
                Self::NameAlreadyExists => {
                    response::message(StatusCode::CONFLICT, "Category name already exists")
                }
                Self::FailedToCreateCategory => {
                    response::unexpected("DatabaseError", "Failed to create category")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
