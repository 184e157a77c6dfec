use super::types::{request, response};
use crate::{
    modules::{
        order::{self, repository::OrderStatus},
        payment::repository::{self, PaymentMethod, PaymentStatus},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let method = payload
        .body
        .method
        .as_deref()
        .and_then(|method| method.parse::<PaymentMethod>().ok())
        .ok_or(response::Error::InvalidMethod)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToPayOrder
    })?;

    let order = order::repository::find_by_id_for_update(&mut *tx, payload.order_id)
        .await
        .map_err(|_| response::Error::FailedToPayOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    if order.user_id != payload.auth.user.id {
        return Err(response::Error::Forbidden);
    }

    let payment = match repository::find_by_order_id_for_update(&mut *tx, order.id.clone())
        .await
        .map_err(|_| response::Error::FailedToPayOrder)?
    {
        Some(payment) => payment,
        None => repository::create(
            &mut *tx,
            repository::CreatePaymentPayload {
                order_id: order.id.clone(),
                method,
                amount: order.total_amount.clone(),
            },
        )
        .await
        .map_err(|_| response::Error::FailedToPayOrder)?,
    };

    if payment.status == PaymentStatus::Paid {
        return Err(response::Error::AlreadyPaid);
    }

    if order.status != OrderStatus::Pending {
        return Err(response::Error::OrderNotPayable(order.status));
    }

    let payment = repository::mark_paid(
        &mut *tx,
        order.id.clone(),
        method,
        order.total_amount.clone(),
    )
    .await
    .map_err(|_| response::Error::FailedToPayOrder)?
    .ok_or(response::Error::PaymentNotPayable)?;

    let order = order::repository::update_status(
        &mut *tx,
        order.id,
        OrderStatus::Pending,
        ctx.payment.order_paid_status,
    )
    .await
    .map_err(|_| response::Error::FailedToPayOrder)?
    .ok_or_else(|| {
        tracing::error!("Locked order {} left the pending status", payment.order_id);
        response::Error::FailedToPayOrder
    })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit payment: {}", err);
        response::Error::FailedToPayOrder
    })?;

    tracing::info!("Order {} paid with {}", order.id, method.to_string());

    Ok(response::Success::PaymentSuccessful { order, payment })
}
