use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, order, payment::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, order_id: String) -> response::Response {
    let order = order::repository::find_by_id(&ctx.db_conn.pool, order_id)
        .await
        .map_err(|_| response::Error::FailedToFetchPayment)?
        .ok_or(response::Error::OrderNotFound)?;

    if order.user_id != auth.user.id {
        return Err(response::Error::Forbidden);
    }

    let payment = repository::find_by_order_id(&ctx.db_conn.pool, order.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchPayment)?;

    Ok(response::Success::Payment(response::OrderPayment {
        order,
        payment,
    }))
}
