use super::types::response;
use crate::{
    modules::{
        auth::middleware::Auth,
        order::{
            repository::{self, OrderStatus},
            service::{check_cancellable, CancelRejection},
        },
    },
    types::Context,
};
use std::sync::Arc;

fn into_error(rejection: CancelRejection) -> response::Error {
    match rejection {
        CancelRejection::AlreadyCancelled => response::Error::AlreadyCancelled,
        CancelRejection::AlreadyPaid => response::Error::AlreadyPaid,
        CancelRejection::NotPending(status) => response::Error::NotCancellable(status),
    }
}

pub async fn service(ctx: Arc<Context>, auth: Auth, id: String) -> response::Response {
    let order = repository::find_by_id_and_user_id(&ctx.db_conn.pool, id, auth.user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCancelOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    check_cancellable(order.status).map_err(into_error)?;

    let cancelled = repository::update_status(
        &ctx.db_conn.pool,
        order.id.clone(),
        OrderStatus::Pending,
        OrderStatus::Cancelled,
    )
    .await
    .map_err(|_| response::Error::FailedToCancelOrder)?;

    if let Some(order) = cancelled {
        return Ok(response::Success::OrderCancelled(order));
    }

    // The status moved on between the read and the update.
    let current = repository::find_by_id_and_user_id(&ctx.db_conn.pool, order.id, auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToCancelOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    match check_cancellable(current.status) {
        Err(rejection) => Err(into_error(rejection)),
        Ok(()) => Err(response::Error::FailedToCancelOrder),
    }
}
