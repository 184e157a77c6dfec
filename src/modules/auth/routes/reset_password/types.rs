pub mod request {
    use crate::utils::validation::deserialize_string_or_number;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub email: Option<String>,
        #[serde(default, deserialize_with = "deserialize_string_or_number")]
        pub otp: Option<String>,
        #[serde(rename = "newPassword")]
        pub new_password: Option<String>,
    }
}

pub mod response {
    use crate::{modules::auth::service::otp::VerificationError, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        PasswordUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PasswordUpdated => {
                    response::message(StatusCode::OK, "Password updated successfully")
                }
            }
        }
    }

    pub enum Error {
        MissingFields,
        PasswordTooShort,
        Otp(VerificationError),
        UserNotFound,
        FailedToHashPassword,
        FailedToUpdatePassword,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFields => response::message(
                    StatusCode::BAD_REQUEST,
                    "email, otp, newPassword are required",
                ),
                Self::PasswordTooShort => response::message(
                    StatusCode::BAD_REQUEST,
                    "Password must be at least 6 characters",
                ),
                Self::Otp(VerificationError::NotFound) => {
                    response::message(StatusCode::BAD_REQUEST, "OTP not found")
                }
                Self::Otp(VerificationError::AlreadyUsed) => {
                    response::message(StatusCode::BAD_REQUEST, "OTP already used")
                }
                Self::Otp(VerificationError::Expired) => {
                    response::message(StatusCode::BAD_REQUEST, "OTP expired")
                }
                Self::Otp(VerificationError::InvalidOtp) => {
                    response::message(StatusCode::BAD_REQUEST, "Invalid OTP")
                }
                Self::UserNotFound => response::message(StatusCode::NOT_FOUND, "User not found"),
                Self::FailedToHashPassword => {
                    response::unexpected("PasswordError", "Failed to hash password")
                }
                Self::FailedToUpdatePassword => {
                    response::unexpected("DatabaseError", "Failed to update password")
                }
                Self::Otp(VerificationError::UnexpectedError) | Self::UnexpectedError => {
                    response::unexpected("DatabaseError", "Failed to reset password")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
