use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::types::BigDecimal;
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Cart {
    pub id: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct CartItem {
    pub id: String,
    pub cart_id: String,
    pub menu_item_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A cart item joined with the menu item it points at.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct CartLine {
    pub menu_item_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub line_total: BigDecimal,
    pub name: String,
    pub image_path: Option<String>,
    pub restaurant_id: String,
    pub category_id: String,
    #[serde(skip_serializing)]
    pub is_available: bool,
}

pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

/// Returns the user's cart, creating it on first use. Concurrent callers end
/// up with the same row thanks to the unique `user_id`.
pub async fn find_or_create_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: String) -> Result<Cart> {
    sqlx::query_as::<_, Cart>(
        "
        INSERT INTO carts (id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(user_id.clone())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating cart for user {}: {}", user_id, err);
        Error::UnexpectedError
    })
}

pub async fn find_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: String) -> Result<Option<Cart>> {
    sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE user_id = $1")
        .bind(user_id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching cart for user {}: {}", user_id, err);
            Error::UnexpectedError
        })
}

/// Locks the user's cart row until the surrounding transaction ends. Adds
/// to the same cart wait on this lock through `find_or_create_by_user_id`.
pub async fn find_by_user_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Option<Cart>> {
    sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE user_id = $1 FOR UPDATE")
        .bind(user_id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while locking cart for user {}: {}", user_id, err);
            Error::UnexpectedError
        })
}

pub struct UpsertCartItemPayload {
    pub cart_id: String,
    pub menu_item_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

/// Adds `quantity` to an existing line or inserts a new one. The unit price is
/// always refreshed to the value passed in. Returns `None`, leaving the line
/// untouched, when the accumulated quantity would not fit in an `INTEGER`.
pub async fn upsert_item<'e, E: PgExecutor<'e>>(
    e: E,
    payload: UpsertCartItemPayload,
) -> Result<Option<CartItem>> {
    sqlx::query_as::<_, CartItem>(
        "
        INSERT INTO cart_items (id, cart_id, menu_item_id, quantity, unit_price)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (cart_id, menu_item_id) DO UPDATE
        SET
            quantity = cart_items.quantity + EXCLUDED.quantity,
            unit_price = EXCLUDED.unit_price,
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE cart_items.quantity::BIGINT + EXCLUDED.quantity <= $6
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.cart_id)
    .bind(payload.menu_item_id)
    .bind(payload.quantity)
    .bind(payload.unit_price)
    .bind(i64::from(i32::MAX))
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while adding item to cart: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_lines_by_cart_id<'e, E: PgExecutor<'e>>(e: E, cart_id: String) -> Result<Vec<CartLine>> {
    sqlx::query_as::<_, CartLine>(
        "
        SELECT
            cart_items.menu_item_id,
            cart_items.quantity,
            cart_items.unit_price,
            (cart_items.quantity * cart_items.unit_price) AS line_total,
            menu_items.name,
            menu_items.image_path,
            menu_items.restaurant_id,
            menu_items.category_id,
            menu_items.is_available
        FROM cart_items
        INNER JOIN menu_items ON menu_items.id = cart_items.menu_item_id
        WHERE cart_items.cart_id = $1
        ORDER BY cart_items.created_at DESC
        ",
    )
    .bind(cart_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching items of cart {}: {}", cart_id, err);
        Error::UnexpectedError
    })
}

pub async fn update_item_quantity<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: String,
    menu_item_id: String,
    quantity: i32,
) -> Result<Option<CartItem>> {
    sqlx::query_as::<_, CartItem>(
        "
        UPDATE cart_items
        SET
            quantity = $3,
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE cart_id = $1 AND menu_item_id = $2
        RETURNING *
        ",
    )
    .bind(cart_id)
    .bind(menu_item_id.clone())
    .bind(quantity)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating cart item {}: {}", menu_item_id, err);
        Error::UnexpectedError
    })
}

/// Returns whether a line was removed.
pub async fn delete_item<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: String,
    menu_item_id: String,
) -> Result<bool> {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND menu_item_id = $2")
        .bind(cart_id)
        .bind(menu_item_id.clone())
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while removing cart item {}: {}", menu_item_id, err);
            Error::UnexpectedError
        })
}

pub async fn delete_items_by_cart_id<'e, E: PgExecutor<'e>>(e: E, cart_id: String) -> Result<u64> {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
        .bind(cart_id.clone())
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while clearing cart {}: {}", cart_id, err);
            Error::UnexpectedError
        })
}
