pub mod response {
    use crate::{modules::restaurant::repository::Restaurant, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        RestaurantDeactivated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantDeactivated(restaurant) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Restaurant deactivated", "restaurant": restaurant })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        RestaurantNotFound,
        FailedToDeactivateRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Restaurant not found")
                }
                Self::FailedToDeactivateRestaurant => {
                    response::unexpected("DatabaseError", "Failed to deactivate restaurant")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
