use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Otp {
    pub id: String,
    pub email: String,
    pub code_hash: String,
    pub purpose: String,
    pub expires_at: NaiveDateTime,
    pub used: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateOtpPayload {
    pub email: String,
    pub code_hash: String,
    pub purpose: String,
    pub expires_at: NaiveDateTime,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateOtpPayload) -> Result<Otp, Error> {
    sqlx::query_as::<_, Otp>(
        "
        INSERT INTO otps (id, email, code_hash, purpose, expires_at, used)
        VALUES ($1, $2, $3, $4, $5, FALSE)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.email)
    .bind(payload.code_hash)
    .bind(payload.purpose)
    .bind(payload.expires_at)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating otp: {}", err);
        Error::UnexpectedError
    })
}

pub async fn invalidate_unused<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
    purpose: String,
) -> Result<u64, Error> {
    sqlx::query("UPDATE otps SET used = TRUE WHERE email = $1 AND purpose = $2 AND used = FALSE")
        .bind(email)
        .bind(purpose)
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while invalidating otps: {}", err);
            Error::UnexpectedError
        })
}

/// Latest otp for the pair, locked until the surrounding transaction ends.
pub async fn find_latest_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
    purpose: String,
) -> Result<Option<Otp>, Error> {
    sqlx::query_as::<_, Otp>(
        "
        SELECT *
        FROM otps
        WHERE email = $1 AND purpose = $2
        ORDER BY created_at DESC, id DESC
        LIMIT 1
        FOR UPDATE
        ",
    )
    .bind(email)
    .bind(purpose)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching latest otp: {}", err);
        Error::UnexpectedError
    })
}

pub async fn mark_used<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Otp>, Error> {
    sqlx::query_as::<_, Otp>("UPDATE otps SET used = TRUE WHERE id = $1 AND used = FALSE RETURNING *")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while marking otp {} as used: {}", id, err);
            Error::UnexpectedError
        })
}
