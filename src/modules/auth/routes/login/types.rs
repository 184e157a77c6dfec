pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub email: Option<String>,
        pub password: Option<String>,
    }
}

pub mod response {
    use crate::utils::response;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        LoggedIn(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedIn(token) => {
                    (StatusCode::OK, Json(json!({ "token": token }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MissingFields,
        InvalidCredentials,
        FailedToFetchUser,
        FailedToVerifyPassword,
        FailedToSignToken,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFields => {
                    response::message(StatusCode::BAD_REQUEST, "email and password are required")
                }
                Self::InvalidCredentials => {
                    response::message(StatusCode::UNAUTHORIZED, "Invalid email or password")
                }
                Self::FailedToFetchUser => {
                    response::unexpected("DatabaseError", "Failed to fetch user")
                }
                Self::FailedToVerifyPassword => {
                    response::unexpected("PasswordError", "Failed to verify password")
                }
                Self::FailedToSignToken => {
                    response::unexpected("TokenError", "Failed to sign token")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
