pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub status: Option<String>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::order::repository::{Order, OrderStatus},
        utils::response,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderStatusUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderStatusUpdated(order) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Order status updated", "order": order })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidStatus,
        OrderNotFound,
        TransitionNotAllowed { from: OrderStatus, to: OrderStatus },
        FailedToUpdateOrderStatus,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidStatus => response::message(StatusCode::BAD_REQUEST, "Invalid status"),
                Self::OrderNotFound => response::message(StatusCode::NOT_FOUND, "Order not found"),
                Self::TransitionNotAllowed { from, to } => response::message(
                    StatusCode::BAD_REQUEST,
                    format!(
                        "Cannot change order status from {} to {}",
                        from.to_string(),
                        to.to_string()
                    ),
                ),
                Self::FailedToUpdateOrderStatus => {
                    response::unexpected("DatabaseError", "Failed to update order status")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
