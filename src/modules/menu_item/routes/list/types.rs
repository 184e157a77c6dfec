pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub restaurant_id: Option<String>,
        pub category_id: Option<String>,
        pub all: Option<String>,
    }

    pub struct Payload {
        pub auth: Option<Auth>,
        pub filters: Filters,
    }
}

pub mod response {
    use crate::{modules::menu_item::repository::MenuItemWithNames, utils::response};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        MenuItems(Vec<MenuItemWithNames>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItems(items) => (StatusCode::OK, Json(items)).into_response(),
            }
        }
    }

    pub enum Error {
        AdminOnly,
        FailedToFetchMenuItems,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminOnly => response::message(StatusCode::FORBIDDEN, "Admin only"),
                Self::FailedToFetchMenuItems => {
                    response::unexpected("DatabaseError", "Failed to fetch menu items")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
