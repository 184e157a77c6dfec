pub mod admin;
pub mod auth;
pub mod cart;
pub mod category;
pub mod log;
pub mod menu_item;
pub mod notification;
pub mod order;
pub mod payment;
pub mod restaurant;
pub mod storage;
pub mod user;

mod router;
pub use router::get_router;
