pub mod response {
    use crate::{
        modules::order::repository::{Order, OrderStatus},
        utils::response,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCancelled(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCancelled(order) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Order cancelled", "order": order })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        AlreadyCancelled,
        AlreadyPaid,
        NotCancellable(OrderStatus),
        FailedToCancelOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => response::message(StatusCode::NOT_FOUND, "Order not found"),
                Self::AlreadyCancelled => {
                    response::message(StatusCode::BAD_REQUEST, "Order is already cancelled")
                }
                Self::AlreadyPaid => {
                    response::message(StatusCode::BAD_REQUEST, "Cannot cancel a paid order")
                }
                Self::NotCancellable(status) => response::message(
                    StatusCode::BAD_REQUEST,
                    format!("Cannot cancel order with status: {}", status.to_string()),
                ),
                Self::FailedToCancelOrder => {
                    response::unexpected("DatabaseError", "Failed to cancel order")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
