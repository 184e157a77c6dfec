use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Confirmed)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Confirmed, OrderStatus::Preparing)
                | (OrderStatus::Preparing, OrderStatus::OnTheWay)
                | (OrderStatus::OnTheWay, OrderStatus::Delivered)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        match self {
            OrderStatus::Pending => String::from("pending"),
            OrderStatus::Confirmed => String::from("confirmed"),
            OrderStatus::Preparing => String::from("preparing"),
            OrderStatus::OnTheWay => String::from("on_the_way"),
            OrderStatus::Delivered => String::from("delivered"),
            OrderStatus::Cancelled => String::from("cancelled"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "on_the_way" => Ok(OrderStatus::OnTheWay),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub delivery_address: String,
    pub notes: Option<String>,
    pub phone: Option<String>,
    pub total_amount: BigDecimal,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct OrderWithUserEmail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub order: Order,
    pub email: String,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub menu_item_id: String,
    pub item_name_snapshot: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub line_total: BigDecimal,
    pub created_at: NaiveDateTime,
}

pub enum Error {
    UnexpectedError,
}

pub struct CreateOrderPayload {
    pub user_id: String,
    pub restaurant_id: String,
    pub delivery_address: String,
    pub notes: Option<String>,
    pub phone: Option<String>,
    pub total_amount: BigDecimal,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateOrderPayload,
) -> Result<Order, Error> {
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (
            id,
            user_id,
            restaurant_id,
            delivery_address,
            notes,
            phone,
            total_amount
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.restaurant_id)
    .bind(payload.delivery_address)
    .bind(payload.notes)
    .bind(payload.phone)
    .bind(payload.total_amount)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating an order: {}", err);
        Error::UnexpectedError
    })
}

pub struct CreateOrderItemPayload {
    pub order_id: String,
    pub menu_item_id: String,
    pub item_name_snapshot: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub line_total: BigDecimal,
}

pub async fn create_item<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateOrderItemPayload,
) -> Result<OrderItem, Error> {
    sqlx::query_as::<_, OrderItem>(
        "
        INSERT INTO order_items (
            id,
            order_id,
            menu_item_id,
            item_name_snapshot,
            unit_price,
            quantity,
            line_total
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.order_id)
    .bind(payload.menu_item_id)
    .bind(payload.item_name_snapshot)
    .bind(payload.unit_price)
    .bind(payload.quantity)
    .bind(payload.line_total)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating an order item: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching order {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Locks the order row until the surrounding transaction ends.
pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 FOR UPDATE")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while locking order {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id_and_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    user_id: String,
) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 AND user_id = $2")
        .bind(id.clone())
        .bind(user_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching order {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Vec<Order>, Error> {
    sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching user orders: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_with_user_email<'e, E: PgExecutor<'e>>(
    e: E,
) -> Result<Vec<OrderWithUserEmail>, Error> {
    sqlx::query_as::<_, OrderWithUserEmail>(
        "
        SELECT orders.*, users.email
        FROM orders
        INNER JOIN users ON users.id = orders.user_id
        ORDER BY orders.created_at DESC, orders.id DESC
        ",
    )
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching all orders: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_by_status<'e, E: PgExecutor<'e>>(
    e: E,
    status: OrderStatus,
) -> Result<Vec<Order>, Error> {
    sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE status = $1 ORDER BY updated_at DESC NULLS LAST, id DESC",
    )
    .bind(status.to_string())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching orders by status: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_items_by_order_id<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
) -> Result<Vec<OrderItem>, Error> {
    sqlx::query_as::<_, OrderItem>(
        "SELECT * FROM order_items WHERE order_id = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(order_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching items of order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Moves the order to `to` only if it is still in `from`. Returns `None` when
/// the row was missing or its status changed underneath.
pub async fn update_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    from: OrderStatus,
    to: OrderStatus,
) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders
        SET
            status = $3,
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE id = $1 AND status = $2
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(from.to_string())
    .bind(to.to_string())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error updating status for order {}: {}", id, err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OnTheWay,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    #[test]
    fn pending_can_be_confirmed_or_cancelled() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Preparing));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn fulfilment_moves_forward_only() {
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::OnTheWay));
        assert!(OrderStatus::OnTheWay.can_transition_to(OrderStatus::Delivered));

        assert!(!OrderStatus::Preparing.can_transition_to(OrderStatus::Confirmed));
        assert!(!OrderStatus::OnTheWay.can_transition_to(OrderStatus::Preparing));
        assert!(!OrderStatus::Confirmed.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn terminal_statuses_have_no_way_out() {
        for from in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            assert!(from.is_terminal());
            for to in ALL {
                assert!(!from.can_transition_to(to));
            }
        }
    }

    #[test]
    fn status_names_round_trip_through_strings() {
        for status in ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
        assert_eq!(OrderStatus::OnTheWay.to_string(), "on_the_way");
        assert!("paid".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_serializes_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::OnTheWay).unwrap(),
            "\"on_the_way\""
        );
    }
}
