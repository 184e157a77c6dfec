use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::database;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    NameAlreadyExists,
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

fn map_write_error(err: sqlx::Error) -> Error {
    if database::is_unique_violation(&err) {
        return Error::NameAlreadyExists;
    }
    tracing::error!("Error occurred while writing a category: {}", err);
    Error::UnexpectedError
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, name: String) -> Result<Category> {
    sqlx::query_as::<_, Category>("INSERT INTO categories (id, name) VALUES ($1, $2) RETURNING *")
        .bind(Ulid::new().to_string())
        .bind(name)
        .fetch_one(e)
        .await
        .map_err(map_write_error)
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    include_inactive: bool,
) -> Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        "SELECT * FROM categories WHERE ($1 OR is_active = TRUE) ORDER BY id DESC",
    )
    .bind(include_inactive)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching categories: {}", err);
        Error::UnexpectedError
    })
}

pub struct UpdateCategoryPayload {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateCategoryPayload,
) -> Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        "
        UPDATE categories
        SET
            name = COALESCE($2, name),
            is_active = COALESCE($3, is_active),
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.is_active)
    .fetch_optional(e)
    .await
    .map_err(map_write_error)
}

pub async fn deactivate_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        "
        UPDATE categories
        SET
            is_active = FALSE,
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while deactivating category {}: {}", id, err);
        Error::UnexpectedError
    })
}
