use super::types::{request, response};
use crate::{
    modules::order::repository::{self, OrderStatus},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let to = payload
        .body
        .status
        .as_deref()
        .and_then(|status| status.parse::<OrderStatus>().ok())
        .ok_or(response::Error::InvalidStatus)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToUpdateOrderStatus
    })?;

    let order = repository::find_by_id_for_update(&mut *tx, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::OrderNotFound)?;

    if !order.status.can_transition_to(to) {
        return Err(response::Error::TransitionNotAllowed {
            from: order.status,
            to,
        });
    }

    let updated = repository::update_status(&mut *tx, order.id, order.status, to)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::FailedToUpdateOrderStatus)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit order status update: {}", err);
        response::Error::FailedToUpdateOrderStatus
    })?;

    tracing::info!(
        "Order {} moved from {} to {}",
        updated.id,
        order.status.to_string(),
        to.to_string()
    );

    Ok(response::Success::OrderStatusUpdated(updated))
}
