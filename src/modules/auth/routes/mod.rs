mod forgot_password;
mod login;
mod me;
mod ping;
mod register;
mod reset_password;
mod verify_otp;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(register::get_router())
        .merge(login::get_router())
        .merge(forgot_password::get_router())
        .merge(verify_otp::get_router())
        .merge(reset_password::get_router())
        .merge(me::get_router())
        .merge(ping::get_router())
}
