pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub email: Option<String>,
    }
}

pub mod response {
    use crate::utils::response;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        OtpSentIfUserExists,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OtpSentIfUserExists => {
                    response::message(StatusCode::OK, "If the email exists, OTP has been sent")
                }
            }
        }
    }

    pub enum Error {
        MissingEmail,
        FailedToFetchUser,
        FailedToCreateOtp,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingEmail => response::message(StatusCode::BAD_REQUEST, "email is required"),
                Self::FailedToFetchUser => {
                    response::unexpected("DatabaseError", "Failed to fetch user")
                }
                Self::FailedToCreateOtp => {
                    response::unexpected("DatabaseError", "Failed to create otp")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
