use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::database;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Restaurant {
    pub id: String,
    pub owner_user_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    OwnerNotFound,
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

fn map_write_error(err: sqlx::Error) -> Error {
    if database::is_foreign_key_violation(&err) {
        return Error::OwnerNotFound;
    }
    tracing::error!("Error occurred while writing a restaurant: {}", err);
    Error::UnexpectedError
}

pub struct CreateRestaurantPayload {
    pub owner_user_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (
            id,
            owner_user_id,
            name,
            description,
            address,
            phone,
            image_path
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.owner_user_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.address)
    .bind(payload.phone)
    .bind(payload.image_path)
    .fetch_one(e)
    .await
    .map_err(map_write_error)
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching restaurant {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    include_inactive: bool,
) -> Result<Vec<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "SELECT * FROM restaurants WHERE ($1 OR is_active = TRUE) ORDER BY id DESC",
    )
    .bind(include_inactive)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching restaurants: {}", err);
        Error::UnexpectedError
    })
}

/// `Some(None)` clears a nullable column, `None` leaves it untouched.
#[derive(Default)]
pub struct UpdateRestaurantPayload {
    pub owner_user_id: Option<Option<String>>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub image_path: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UpdateRestaurantPayload {
    pub fn is_empty(&self) -> bool {
        self.owner_user_id.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.image_path.is_none()
            && self.is_active.is_none()
    }
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateRestaurantPayload,
) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants
        SET
            owner_user_id = CASE WHEN $2 THEN $3 ELSE owner_user_id END,
            name = COALESCE($4, name),
            description = CASE WHEN $5 THEN $6 ELSE description END,
            address = CASE WHEN $7 THEN $8 ELSE address END,
            phone = CASE WHEN $9 THEN $10 ELSE phone END,
            image_path = CASE WHEN $11 THEN $12 ELSE image_path END,
            is_active = COALESCE($13, is_active),
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(payload.owner_user_id.is_some())
    .bind(payload.owner_user_id.flatten())
    .bind(payload.name)
    .bind(payload.description.is_some())
    .bind(payload.description.flatten())
    .bind(payload.address.is_some())
    .bind(payload.address.flatten())
    .bind(payload.phone.is_some())
    .bind(payload.phone.flatten())
    .bind(payload.image_path.is_some())
    .bind(payload.image_path.flatten())
    .bind(payload.is_active)
    .fetch_optional(e)
    .await
    .map_err(map_write_error)
}

pub async fn deactivate_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants
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
        tracing::error!("Error occurred while deactivating restaurant {}: {}", id, err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_null_counts_as_an_update() {
        assert!(UpdateRestaurantPayload::default().is_empty());
        assert!(!UpdateRestaurantPayload {
            phone: Some(None),
            ..Default::default()
        }
        .is_empty());
    }
}
