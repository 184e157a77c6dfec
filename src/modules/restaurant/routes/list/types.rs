pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub all: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub filters: Filters,
    }
}

pub mod response {
    use crate::{modules::restaurant::repository::Restaurant, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        Restaurants(Vec<Restaurant>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Restaurants(restaurants) => {
                    (StatusCode::OK, Json(restaurants)).into_response()
                }
            }
        }
    }

    pub enum Error {
        AdminOnly,
        FailedToFetchRestaurants,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminOnly => response::message(StatusCode::FORBIDDEN, "Admin only"),
                Self::FailedToFetchRestaurants => {
                    response::unexpected("DatabaseError", "Failed to fetch restaurants")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
