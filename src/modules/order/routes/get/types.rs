pub mod response {
    use crate::{
        modules::{
            order::repository::{Order, OrderItem},
            restaurant::repository::Restaurant,
        },
        utils::response,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;

    #[derive(Serialize)]
    pub struct OrderDetail {
        pub order: Order,
        pub items: Vec<OrderItem>,
        pub restaurant: Option<Restaurant>,
    }

    pub enum Success {
        Order(OrderDetail),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Order(detail) => (StatusCode::OK, Json(detail)).into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        FailedToFetchOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => response::message(StatusCode::NOT_FOUND, "Order not found"),
                Self::FailedToFetchOrder => {
                    response::unexpected("DatabaseError", "Failed to fetch order")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
