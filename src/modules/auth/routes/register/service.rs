use super::types::{request, response};
use crate::{
    modules::{auth::service, user},
    types::Context,
    utils::validation::present,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let (username, email, password) = match (
        present(&payload.username),
        present(&payload.email),
        payload.password.as_deref().filter(|p| !p.is_empty()),
    ) {
        (Some(username), Some(email), Some(password)) => {
            (username.to_string(), email.to_string(), password.to_string())
        }
        _ => return Err(response::Error::MissingFields),
    };

    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if user::repository::find_by_email(&ctx.db_conn.pool, email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyRegistered);
    }

    let password_hash = service::password::hash(password)
        .await
        .map_err(|_| response::Error::FailedToHashPassword)?;

    let user = user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            username,
            email,
            password_hash,
            address: payload.address,
            phone: payload.phone,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyRegistered,
        _ => response::Error::FailedToCreateUser,
    })?;

    tracing::info!("Registered user {}", user.id);

    Ok(response::Success::Registered(user))
}
