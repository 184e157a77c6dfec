pub mod response {
    use crate::{modules::cart::repository::CartLine, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use sqlx::types::BigDecimal;

    #[derive(Serialize)]
    pub struct CartView {
        pub cart_id: Option<String>,
        pub items: Vec<CartLine>,
        pub total_amount: BigDecimal,
    }

    pub enum Success {
        Cart(CartView),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Cart(cart) => (StatusCode::OK, Json(cart)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchCart => {
                    response::unexpected("DatabaseError", "Failed to fetch cart")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
