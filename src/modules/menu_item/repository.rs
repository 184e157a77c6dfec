use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::types::BigDecimal;
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

use crate::utils::database;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_path: Option<String>,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuItemWithNames {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub item: MenuItem,
    pub restaurant_name: String,
    pub category_name: String,
}

#[derive(Debug)]
pub enum Error {
    ReferenceNotFound,
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum PriceError {
    Invalid,
    Negative,
}

pub fn parse_price(raw: &str) -> std::result::Result<BigDecimal, PriceError> {
    let price = BigDecimal::from_str(raw.trim()).map_err(|_| PriceError::Invalid)?;

    if price < BigDecimal::from(0) {
        return Err(PriceError::Negative);
    }

    Ok(price.with_scale(2))
}

fn map_write_error(err: sqlx::Error) -> Error {
    if database::is_foreign_key_violation(&err) {
        return Error::ReferenceNotFound;
    }
    tracing::error!("Error occurred while writing a menu item: {}", err);
    Error::UnexpectedError
}

pub struct CreateMenuItemPayload {
    pub restaurant_id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_path: Option<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateMenuItemPayload) -> Result<MenuItem> {
    sqlx::query_as::<_, MenuItem>(
        "
        INSERT INTO menu_items (
            id,
            restaurant_id,
            category_id,
            name,
            description,
            price,
            image_path,
            is_available
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.restaurant_id)
    .bind(payload.category_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.image_path)
    .fetch_one(e)
    .await
    .map_err(map_write_error)
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching menu item {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_with_names_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    include_unavailable: bool,
) -> Result<Option<MenuItemWithNames>> {
    sqlx::query_as::<_, MenuItemWithNames>(
        "
        SELECT
            menu_items.*,
            restaurants.name AS restaurant_name,
            categories.name AS category_name
        FROM menu_items
        INNER JOIN restaurants ON restaurants.id = menu_items.restaurant_id
        INNER JOIN categories ON categories.id = menu_items.category_id
        WHERE menu_items.id = $1 AND ($2 OR menu_items.is_available = TRUE)
        ",
    )
    .bind(id.clone())
    .bind(include_unavailable)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching menu item {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub struct FindManyFilters {
    pub restaurant_id: Option<String>,
    pub category_id: Option<String>,
    pub include_unavailable: bool,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    filters: FindManyFilters,
) -> Result<Vec<MenuItemWithNames>> {
    sqlx::query_as::<_, MenuItemWithNames>(
        "
        SELECT
            menu_items.*,
            restaurants.name AS restaurant_name,
            categories.name AS category_name
        FROM menu_items
        INNER JOIN restaurants ON restaurants.id = menu_items.restaurant_id
        INNER JOIN categories ON categories.id = menu_items.category_id
        WHERE
            ($1 OR menu_items.is_available = TRUE)
            AND ($2::TEXT IS NULL OR menu_items.restaurant_id = $2)
            AND ($3::TEXT IS NULL OR menu_items.category_id = $3)
        ORDER BY menu_items.created_at DESC, menu_items.id DESC
        ",
    )
    .bind(filters.include_unavailable)
    .bind(filters.restaurant_id)
    .bind(filters.category_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching menu items: {}", err);
        Error::UnexpectedError
    })
}

#[derive(Default)]
pub struct UpdateMenuItemPayload {
    pub restaurant_id: Option<String>,
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub image_path: Option<String>,
    pub is_available: Option<bool>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateMenuItemPayload,
) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "
        UPDATE menu_items
        SET
            restaurant_id = COALESCE($2, restaurant_id),
            category_id = COALESCE($3, category_id),
            name = COALESCE($4, name),
            description = COALESCE($5, description),
            price = COALESCE($6, price),
            image_path = COALESCE($7, image_path),
            is_available = COALESCE($8, is_available),
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(payload.restaurant_id)
    .bind(payload.category_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.image_path)
    .bind(payload.is_available)
    .fetch_optional(e)
    .await
    .map_err(map_write_error)
}

pub async fn deactivate_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<String>> {
    sqlx::query_scalar::<_, String>(
        "
        UPDATE menu_items
        SET
            is_available = FALSE,
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE id = $1
        RETURNING id
        ",
    )
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while deactivating menu item {}: {}", id, err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_are_parsed_exactly() {
        assert_eq!(
            parse_price(" 12500.5 ").unwrap(),
            BigDecimal::from_str("12500.50").unwrap()
        );
        assert_eq!(parse_price("0").unwrap(), BigDecimal::from(0));
    }

    #[test]
    fn bad_prices_are_rejected() {
        assert_eq!(parse_price("abc"), Err(PriceError::Invalid));
        assert_eq!(parse_price(""), Err(PriceError::Invalid));
        assert_eq!(parse_price("-1"), Err(PriceError::Negative));
    }
}
