use super::types::{request, response};
use crate::{
    modules::{auth::service, user},
    types::Context,
    utils::validation::present,
};
use std::sync::Arc;

const MIN_PASSWORD_LENGTH: usize = 6;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let (email, otp, new_password) = match (
        present(&payload.email),
        present(&payload.otp),
        payload.new_password.as_deref().filter(|p| !p.is_empty()),
    ) {
        (Some(email), Some(otp), Some(new_password)) => (
            email.to_string(),
            otp.to_string(),
            new_password.to_string(),
        ),
        _ => return Err(response::Error::MissingFields),
    };

    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(response::Error::PasswordTooShort);
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    service::otp::verify(&mut tx, email.clone(), otp)
        .await
        .map_err(response::Error::Otp)?;

    let password_hash = service::password::hash(new_password)
        .await
        .map_err(|_| response::Error::FailedToHashPassword)?;

    user::repository::update_password_by_email(&mut *tx, email, password_hash)
        .await
        .map_err(|_| response::Error::FailedToUpdatePassword)?
        .ok_or(response::Error::UserNotFound)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::PasswordUpdated)
}
