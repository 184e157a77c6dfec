use chrono::{Duration, NaiveDateTime, Utc};
use rand::Rng;
use sha2::Digest;
use sqlx::{Postgres, Transaction};

use crate::{
    modules::{
        auth::repository::{self, otp::Otp},
        notification,
    },
    types::Context,
};
use std::sync::Arc;

pub const RESET_PASSWORD: &str = "reset_password";
pub const VALIDITY_MINUTES: i64 = 10;

#[derive(Debug)]
pub enum SendError {
    NotSent,
    UnexpectedError,
}

#[derive(Debug, PartialEq)]
pub enum VerificationError {
    NotFound,
    AlreadyUsed,
    Expired,
    InvalidOtp,
    UnexpectedError,
}

pub fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

pub fn generate_hash(code: &str) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(code.trim());
    base16ct::lower::encode_string(&hasher.finalize())
}

pub fn check(otp: &Otp, code: &str, now: NaiveDateTime) -> Result<(), VerificationError> {
    if otp.used {
        return Err(VerificationError::AlreadyUsed);
    }

    if otp.expires_at < now {
        return Err(VerificationError::Expired);
    }

    if generate_hash(code) != otp.code_hash {
        return Err(VerificationError::InvalidOtp);
    }

    Ok(())
}

/// Replaces any outstanding reset code for `email` and mails the new one.
pub async fn send(ctx: Arc<Context>, email: String) -> Result<(), SendError> {
    let code = generate_code();

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        SendError::UnexpectedError
    })?;

    repository::otp::invalidate_unused(&mut *tx, email.clone(), RESET_PASSWORD.to_string())
        .await
        .map_err(|_| SendError::UnexpectedError)?;

    repository::otp::create(
        &mut *tx,
        repository::otp::CreateOtpPayload {
            email: email.clone(),
            code_hash: generate_hash(&code),
            purpose: RESET_PASSWORD.to_string(),
            expires_at: Utc::now().naive_utc() + Duration::minutes(VALIDITY_MINUTES),
        },
    )
    .await
    .map_err(|_| SendError::UnexpectedError)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        SendError::UnexpectedError
    })?;

    notification::service::send(
        ctx,
        notification::service::Notification::password_reset_otp_requested(
            email,
            code,
            VALIDITY_MINUTES,
        ),
        notification::service::Backend::Email,
    )
    .await
    .map_err(|_| SendError::NotSent)
}

/// Checks `code` against the latest reset otp for `email` and burns it.
pub async fn verify(
    tx: &mut Transaction<'_, Postgres>,
    email: String,
    code: String,
) -> Result<Otp, VerificationError> {
    let otp = repository::otp::find_latest_for_update(&mut **tx, email, RESET_PASSWORD.to_string())
        .await
        .map_err(|_| VerificationError::UnexpectedError)?
        .ok_or(VerificationError::NotFound)?;

    check(&otp, &code, Utc::now().naive_utc())?;

    repository::otp::mark_used(&mut **tx, otp.id)
        .await
        .map_err(|_| VerificationError::UnexpectedError)?
        .ok_or(VerificationError::AlreadyUsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn otp(code: &str, used: bool, expires_in_minutes: i64) -> Otp {
        let now = Utc::now().naive_utc();
        Otp {
            id: String::from("otp"),
            email: String::from("a@b.mn"),
            code_hash: generate_hash(code),
            purpose: RESET_PASSWORD.to_string(),
            expires_at: now + Duration::minutes(expires_in_minutes),
            used,
            created_at: now,
        }
    }

    #[test]
    fn codes_are_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn hash_is_lowercase_sha256_hex() {
        assert_eq!(
            generate_hash("123456"),
            "8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92"
        );
    }

    #[test]
    fn matching_code_passes() {
        assert_eq!(
            check(&otp("123456", false, 10), "123456", Utc::now().naive_utc()),
            Ok(())
        );
    }

    #[test]
    fn wrong_code_is_invalid() {
        assert_eq!(
            check(&otp("123456", false, 10), "654321", Utc::now().naive_utc()),
            Err(VerificationError::InvalidOtp)
        );
    }

    #[test]
    fn used_is_reported_before_expiry_and_mismatch() {
        assert_eq!(
            check(&otp("123456", true, -5), "000000", Utc::now().naive_utc()),
            Err(VerificationError::AlreadyUsed)
        );
    }

    #[test]
    fn expired_is_reported_before_mismatch() {
        assert_eq!(
            check(&otp("123456", false, -1), "000000", Utc::now().naive_utc()),
            Err(VerificationError::Expired)
        );
    }
}
