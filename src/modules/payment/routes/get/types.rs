pub mod response {
    use crate::{
        modules::{order::repository::Order, payment::repository::Payment},
        utils::response,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;

    #[derive(Serialize)]
    pub struct OrderPayment {
        pub order: Order,
        pub payment: Option<Payment>,
    }

    pub enum Success {
        Payment(OrderPayment),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Payment(payment) => (StatusCode::OK, Json(payment)).into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        Forbidden,
        FailedToFetchPayment,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => response::message(StatusCode::NOT_FOUND, "Order not found"),
                Self::Forbidden => response::message(StatusCode::FORBIDDEN, "Forbidden"),
                Self::FailedToFetchPayment => {
                    response::unexpected("DatabaseError", "Failed to fetch payment")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
