use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    #[serde(rename = "CARD")]
    Card,
    #[serde(rename = "COD")]
    Cod,
}

impl ToString for PaymentMethod {
    fn to_string(&self) -> String {
        match self {
            PaymentMethod::Card => String::from("CARD"),
            PaymentMethod::Cod => String::from("COD"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CARD" => Ok(PaymentMethod::Card),
            "COD" => Ok(PaymentMethod::Cod),
            _ => Err(format!("'{}' is not a valid PaymentMethod", s)),
        }
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl ToString for PaymentStatus {
    fn to_string(&self) -> String {
        match self {
            PaymentStatus::Pending => String::from("pending"),
            PaymentStatus::Paid => String::from("paid"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            _ => Err(format!("'{}' is not a valid PaymentStatus", s)),
        }
    }
}

impl TryFrom<String> for PaymentStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    #[sqlx(try_from = "String")]
    pub method: PaymentMethod,
    #[sqlx(try_from = "String")]
    pub status: PaymentStatus,
    pub amount: BigDecimal,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub enum Error {
    UnexpectedError,
}

pub async fn find_by_order_id<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
) -> Result<Option<Payment>, Error> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE order_id = $1")
        .bind(order_id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching payment for order {}: {}",
                order_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_order_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
) -> Result<Option<Payment>, Error> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE order_id = $1 FOR UPDATE")
        .bind(order_id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while locking payment for order {}: {}",
                order_id,
                err
            );
            Error::UnexpectedError
        })
}

pub struct CreatePaymentPayload {
    pub order_id: String,
    pub method: PaymentMethod,
    pub amount: BigDecimal,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreatePaymentPayload,
) -> Result<Payment, Error> {
    sqlx::query_as::<_, Payment>(
        "
        INSERT INTO payments (id, order_id, method, status, amount)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.order_id)
    .bind(payload.method.to_string())
    .bind(PaymentStatus::Pending.to_string())
    .bind(payload.amount)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a payment: {}", err);
        Error::UnexpectedError
    })
}

/// Settles a pending payment. Returns `None` if the payment was not pending.
pub async fn mark_paid<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
    method: PaymentMethod,
    amount: BigDecimal,
) -> Result<Option<Payment>, Error> {
    sqlx::query_as::<_, Payment>(
        "
        UPDATE payments
        SET
            status = $4,
            method = $2,
            amount = $3,
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE order_id = $1 AND status = $5
        RETURNING *
        ",
    )
    .bind(order_id.clone())
    .bind(method.to_string())
    .bind(amount)
    .bind(PaymentStatus::Paid.to_string())
    .bind(PaymentStatus::Pending.to_string())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while settling payment for order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_are_upper_case_on_the_wire() {
        assert_eq!("CARD".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert_eq!("COD".parse::<PaymentMethod>(), Ok(PaymentMethod::Cod));
        assert!("card".parse::<PaymentMethod>().is_err());
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cod).unwrap(),
            "\"COD\""
        );
    }

    #[test]
    fn statuses_are_lower_case() {
        assert_eq!(PaymentStatus::Paid.to_string(), "paid");
        assert_eq!("pending".parse::<PaymentStatus>(), Ok(PaymentStatus::Pending));
        assert!("refunded".parse::<PaymentStatus>().is_err());
    }
}
