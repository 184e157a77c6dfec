use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Log {
    pub id: String,
    pub error_type: String,
    pub message: String,
    pub endpoint: String,
    pub user_id: Option<String>,
    pub created_at: NaiveDateTime,
}

pub enum Error {
    UnexpectedError,
}

pub struct CreateLogPayload {
    pub error_type: String,
    pub message: String,
    pub endpoint: String,
    pub user_id: Option<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateLogPayload) -> Result<Log, Error> {
    sqlx::query_as::<_, Log>(
        "
        INSERT INTO logs (id, error_type, message, endpoint, user_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.error_type)
    .bind(payload.message)
    .bind(payload.endpoint)
    .bind(payload.user_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while writing error log: {}", err);
        Error::UnexpectedError
    })
}
