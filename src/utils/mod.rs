pub mod database;
pub mod response;
pub mod validation;
