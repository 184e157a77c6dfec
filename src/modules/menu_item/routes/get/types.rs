pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Option<Auth>,
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::menu_item::repository::MenuItemWithNames, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        MenuItem(MenuItemWithNames),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItem(item) => (StatusCode::OK, Json(item)).into_response(),
            }
        }
    }

    pub enum Error {
        MenuItemNotFound,
        FailedToFetchMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemNotFound => {
                    response::message(StatusCode::NOT_FOUND, "Menu item not found")
                }
                Self::FailedToFetchMenuItem => {
                    response::unexpected("DatabaseError", "Failed to fetch menu item")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
