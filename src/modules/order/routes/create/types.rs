pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub delivery_address: Option<String>,
        pub notes: Option<String>,
        pub phone: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Order created", "order": order })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        DeliveryAddressRequired,
        CartEmpty,
        ItemsNotAvailable,
        MultipleRestaurants,
        FailedToCreateOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DeliveryAddressRequired => {
                    response::message(StatusCode::BAD_REQUEST, "delivery_address required")
                }
                Self::CartEmpty => response::message(StatusCode::BAD_REQUEST, "Cart is empty"),
                Self::ItemsNotAvailable => {
                    response::message(StatusCode::BAD_REQUEST, "Some items are not available")
                }
                Self::MultipleRestaurants => response::message(
                    StatusCode::BAD_REQUEST,
                    "Cart must contain items from one restaurant only",
                ),
                Self::FailedToCreateOrder => {
                    response::unexpected("DatabaseError", "Failed to create order")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
