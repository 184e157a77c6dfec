pub mod request {
    use crate::utils::validation::deserialize_some;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        #[serde(default, deserialize_with = "deserialize_some")]
        pub owner_user_id: Option<Option<String>>,
        pub name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_some")]
        pub description: Option<Option<String>>,
        #[serde(default, deserialize_with = "deserialize_some")]
        pub address: Option<Option<String>>,
        #[serde(default, deserialize_with = "deserialize_some")]
        pub phone: Option<Option<String>>,
        #[serde(default, deserialize_with = "deserialize_some")]
        pub image_path: Option<Option<String>>,
        pub is_active: Option<bool>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::restaurant::repository::Restaurant, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        RestaurantUpdated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantUpdated(restaurant) => {
                    (StatusCode::OK, Json(restaurant)).into_response()
                }
            }
        }
    }

    pub enum Error {
        NameEmpty,
        NothingToUpdate,
        RestaurantNotFound,
        OwnerNotFound,
        FailedToUpdateRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NameEmpty => response::message(StatusCode::BAD_REQUEST, "name cannot be empty"),
                Self::NothingToUpdate => {
                    response::message(StatusCode::BAD_REQUEST, "Nothing to update")
                }
                Self::RestaurantNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Restaurant not found")
                }
                Self::OwnerNotFound => {
                    response::message(StatusCode::CONFLICT, "owner_user_id not found in users")
                }
                Self::FailedToUpdateRestaurant => {
                    response::unexpected("DatabaseError", "Failed to update restaurant")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
