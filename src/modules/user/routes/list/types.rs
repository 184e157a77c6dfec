pub mod response {
    use crate::{modules::user::repository::User, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Users(Vec<User>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Users(users) => {
                    (StatusCode::OK, Json(json!({ "users": users }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchUsers,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchUsers => {
                    response::unexpected("DatabaseError", "Failed to fetch users")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
