pub mod response {
    use crate::{modules::order::repository::OrderWithUserEmail, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        Orders(Vec<OrderWithUserEmail>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders(orders) => (StatusCode::OK, Json(orders)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchOrders,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOrders => {
                    response::unexpected("DatabaseError", "Failed to fetch orders")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
