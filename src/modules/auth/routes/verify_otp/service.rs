use super::types::{request, response};
use crate::{modules::auth::service, types::Context, utils::validation::present};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let (email, otp) = match (present(&payload.email), present(&payload.otp)) {
        (Some(email), Some(otp)) => (email.to_string(), otp.to_string()),
        _ => return Err(response::Error::MissingFields),
    };

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    service::otp::verify(&mut tx, email, otp)
        .await
        .map_err(response::Error::Otp)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::OtpVerified)
}
