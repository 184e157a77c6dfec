pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub owner_user_id: Option<String>,
        pub name: Option<String>,
        pub description: Option<String>,
        pub address: Option<String>,
        pub phone: Option<String>,
        pub image_path: Option<String>,
    }
}

pub mod response {
    use crate::{modules::restaurant::repository::Restaurant, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        RestaurantCreated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantCreated(restaurant) => {
                    (StatusCode::CREATED, Json(restaurant)).into_response()
                }
            }
        }
    }

    pub enum Error {
        NameRequired,
        OwnerNotFound,
        FailedToCreateRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NameRequired => response::message(StatusCode::BAD_REQUEST, "name is required"),
                Self::OwnerNotFound => {
                    response::message(StatusCode::CONFLICT, "owner_user_id not found in users")
                }
                Self::FailedToCreateRestaurant => {
                    response::unexpected("DatabaseError", "Failed to create restaurant")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
