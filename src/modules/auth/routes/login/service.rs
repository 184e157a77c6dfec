use super::types::{request, response};
use crate::{
    modules::{auth::service, user},
    types::Context,
    utils::validation::present,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let (email, password) = match (
        present(&payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) {
        (Some(email), Some(password)) => (email.to_string(), password),
        _ => return Err(response::Error::MissingFields),
    };

    let user = user::repository::find_by_email(&ctx.db_conn.pool, email)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !service::password::verify(password, user.password_hash.clone())
        .await
        .map_err(|_| response::Error::FailedToVerifyPassword)?
    {
        return Err(response::Error::InvalidCredentials);
    }

    service::token::sign(&ctx.auth, &user)
        .map_err(|_| response::Error::FailedToSignToken)
        .map(response::Success::LoggedIn)
}
