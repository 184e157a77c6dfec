pub mod email;

use crate::types::Context;
use std::sync::Arc;

pub enum Backend {
    Email,
}

pub mod types {
    #[derive(Clone)]
    pub struct PasswordResetOtpRequested {
        pub email: String,
        pub otp: String,
        pub validity_minutes: i64,
    }
}

#[derive(Clone)]
pub enum Notification {
    PasswordResetOtpRequested(types::PasswordResetOtpRequested),
}

impl Notification {
    pub fn password_reset_otp_requested(email: String, otp: String, validity_minutes: i64) -> Self {
        Notification::PasswordResetOtpRequested(types::PasswordResetOtpRequested {
            email,
            otp,
            validity_minutes,
        })
    }
}

#[derive(Debug)]
pub enum Error {
    NotSent,
    InvalidRecipient,
}

pub type Result<T> = std::result::Result<T, Error>;

pub async fn send(ctx: Arc<Context>, notification: Notification, backend: Backend) -> Result<()> {
    match backend {
        Backend::Email => email::send(ctx, notification).await,
    }
}
