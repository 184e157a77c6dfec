pub mod request {
    use crate::utils::validation::has_dotted_domain;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        pub username: Option<String>,
        #[validate(
            email(code = "INVALID_USER_EMAIL", message = "Invalid email format"),
            custom(function = "has_dotted_domain")
        )]
        pub email: Option<String>,
        #[validate(length(
            min = 6,
            code = "PASSWORD_TOO_SHORT",
            message = "Password must be at least 6 characters"
        ))]
        pub password: Option<String>,
        pub address: Option<String>,
        pub phone: Option<String>,
    }
}

pub mod response {
    use crate::{
        modules::user::repository::User,
        utils::{response, validation},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Registered(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Registered(user) => {
                    (StatusCode::CREATED, Json(json!({ "user": user }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MissingFields,
        FailedToValidate(ValidationErrors),
        EmailAlreadyRegistered,
        FailedToFetchUser,
        FailedToHashPassword,
        FailedToCreateUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFields => response::message(
                    StatusCode::BAD_REQUEST,
                    "username, email, password are required",
                ),
                Self::FailedToValidate(errors) => {
                    validation::into_response(errors, &["email", "password"])
                }
                Self::EmailAlreadyRegistered => {
                    response::message(StatusCode::CONFLICT, "Email already registered")
                }
                Self::FailedToFetchUser => {
                    response::unexpected("DatabaseError", "Failed to fetch user")
                }
                Self::FailedToHashPassword => {
                    response::unexpected("PasswordError", "Failed to hash password")
                }
                Self::FailedToCreateUser => {
                    response::unexpected("DatabaseError", "Failed to create user")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
