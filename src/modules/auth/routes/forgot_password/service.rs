use super::types::{request, response};
use crate::{
    modules::{auth::service, user},
    types::Context,
    utils::validation::present,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let email = present(&payload.email)
        .map(|email| email.to_string())
        .ok_or(response::Error::MissingEmail)?;

    if user::repository::find_by_email(&ctx.db_conn.pool, email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_none()
    {
        tracing::info!("Password reset requested for an unknown email");
        return Ok(response::Success::OtpSentIfUserExists);
    }

    match service::otp::send(ctx.clone(), email).await {
        Ok(()) => Ok(response::Success::OtpSentIfUserExists),
        // Delivery failures answer exactly like unknown emails.
        Err(service::otp::SendError::NotSent) => {
            tracing::error!("Failed to deliver password reset otp");
            Ok(response::Success::OtpSentIfUserExists)
        }
        Err(service::otp::SendError::UnexpectedError) => Err(response::Error::FailedToCreateOtp),
    }
}
