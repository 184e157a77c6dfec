pub mod request {
    use crate::utils::validation::deserialize_string_or_number;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub email: Option<String>,
        #[serde(default, deserialize_with = "deserialize_string_or_number")]
        pub otp: Option<String>,
    }
}

pub mod response {
    use crate::{modules::auth::service::otp::VerificationError, utils::response};
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        OtpVerified,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OtpVerified => response::message(StatusCode::OK, "OTP verified"),
            }
        }
    }

    pub enum Error {
        MissingFields,
        Otp(VerificationError),
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFields => {
                    response::message(StatusCode::BAD_REQUEST, "email and otp are required")
                }
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
                Self::Otp(VerificationError::UnexpectedError) | Self::UnexpectedError => {
                    response::unexpected("DatabaseError", "Failed to verify otp")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
