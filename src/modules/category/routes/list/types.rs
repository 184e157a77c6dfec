pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub all: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub filters: Filters,
    }
}

pub mod response {
    use crate::{modules::category::repository::Category, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        Categories(Vec<Category>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Categories(categories) => (StatusCode::OK, Json(categories)).into_response(),
            }
        }
    }

    pub enum Error {
        AdminOnly,
        FailedToFetchCategories,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminOnly => response::message(StatusCode::FORBIDDEN, "Admin only"),
                Self::FailedToFetchCategories => {
                    response::unexpected("DatabaseError", "Failed to fetch categories")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
