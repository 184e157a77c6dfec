use crate::types::Context;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::sync::Arc;

use super::{types, Error, Notification, Result};

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    match notification {
        Notification::PasswordResetOtpRequested(n) => {
            send_password_reset_otp_email(ctx, n).await
        }
    }
}

pub fn password_reset_otp_body(n: &types::PasswordResetOtpRequested) -> String {
    format!(
        "Your OTP is: {} (valid {} minutes)",
        n.otp, n.validity_minutes
    )
}

async fn send_password_reset_otp_email(
    ctx: Arc<Context>,
    n: types::PasswordResetOtpRequested,
) -> Result<()> {
    send_email(
        ctx,
        SendEmailPayload {
            to: n.email.clone(),
            subject: String::from("Your OTP code"),
            body: password_reset_otp_body(&n),
        },
    )
    .await
}

struct SendEmailPayload {
    to: String,
    subject: String,
    body: String,
}

async fn send_email(ctx: Arc<Context>, payload: SendEmailPayload) -> Result<()> {
    let from: Mailbox = ctx.mail.sender.parse().map_err(|err| {
        tracing::error!("Invalid mail sender address {}: {}", ctx.mail.sender, err);
        Error::InvalidRecipient
    })?;
    let to: Mailbox = payload.to.parse().map_err(|err| {
        tracing::error!("Invalid recipient address {}: {}", payload.to, err);
        Error::InvalidRecipient
    })?;

    let email = Message::builder()
        .from(from)
        .to(to)
        .subject(payload.subject)
        .header(ContentType::TEXT_PLAIN)
        .body(payload.body)
        .map_err(|err| {
            tracing::error!("Failed to build email: {}", err);
            Error::NotSent
        })?;

    let transport: AsyncSmtpTransport<Tokio1Executor> =
        AsyncSmtpTransport::<Tokio1Executor>::relay(&ctx.mail.host)
            .map_err(|err| {
                tracing::error!("Failed to create mail transport: {}", err);
                Error::NotSent
            })?
            .credentials(Credentials::new(
                ctx.mail.user.clone(),
                ctx.mail.password.clone(),
            ))
            .build();

    match transport.send(email).await {
        Ok(_) => {
            tracing::info!("Email sent to {}", payload.to);
            Ok(())
        }
        Err(err) => {
            tracing::error!("Failed to send email to {}: {}", payload.to, err);
            Err(Error::NotSent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_body_mentions_code_and_validity() {
        let body = password_reset_otp_body(&types::PasswordResetOtpRequested {
            email: String::from("a@b.mn"),
            otp: String::from("123456"),
            validity_minutes: 10,
        });

        assert_eq!(body, "Your OTP is: 123456 (valid 10 minutes)");
    }
}
