pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub method: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub order_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::{
            order::repository::{Order, OrderStatus},
            payment::repository::Payment,
        },
        utils::response,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PaymentSuccessful { order: Order, payment: Payment },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaymentSuccessful { order, payment } => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Payment successful",
                        "order": order,
                        "payment": payment,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidMethod,
        OrderNotFound,
        Forbidden,
        AlreadyPaid,
        OrderNotPayable(OrderStatus),
        PaymentNotPayable,
        FailedToPayOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidMethod => {
                    response::message(StatusCode::BAD_REQUEST, "method must be CARD or COD")
                }
                Self::OrderNotFound => response::message(StatusCode::NOT_FOUND, "Order not found"),
                Self::Forbidden => response::message(StatusCode::FORBIDDEN, "Forbidden"),
                Self::AlreadyPaid => response::message(StatusCode::BAD_REQUEST, "Already paid"),
                Self::OrderNotPayable(status) => response::message(
                    StatusCode::BAD_REQUEST,
                    format!("Order is not payable in status: {}", status.to_string()),
                ),
                Self::PaymentNotPayable => {
                    response::message(StatusCode::BAD_REQUEST, "Payment is not payable")
                }
                Self::FailedToPayOrder => {
                    response::unexpected("DatabaseError", "Failed to process payment")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
