use super::types::{request, response};
use crate::{
    modules::{
        cart,
        order::{
            repository,
            service::{checkout_restaurant, CartRejection},
        },
    },
    types::Context,
    utils::validation::present,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let delivery_address = present(&payload.body.delivery_address)
        .map(|address| address.to_string())
        .ok_or(response::Error::DeliveryAddressRequired)?;
    let user_id = payload.auth.user.id;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateOrder
    })?;

    let cart = cart::repository::find_by_user_id_for_update(&mut *tx, user_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?
        .ok_or(response::Error::CartEmpty)?;

    let lines = cart::repository::find_lines_by_cart_id(&mut *tx, cart.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?;

    let restaurant_id = checkout_restaurant(&lines).map_err(|rejection| match rejection {
        CartRejection::Empty => response::Error::CartEmpty,
        CartRejection::ItemsNotAvailable => response::Error::ItemsNotAvailable,
        CartRejection::MultipleRestaurants => response::Error::MultipleRestaurants,
    })?;

    let order = repository::create(
        &mut *tx,
        repository::CreateOrderPayload {
            user_id,
            restaurant_id,
            delivery_address,
            notes: present(&payload.body.notes).map(|notes| notes.to_string()),
            phone: present(&payload.body.phone).map(|phone| phone.to_string()),
            total_amount: cart::service::total(&lines),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)?;

    for line in lines {
        repository::create_item(
            &mut *tx,
            repository::CreateOrderItemPayload {
                order_id: order.id.clone(),
                menu_item_id: line.menu_item_id,
                item_name_snapshot: line.name,
                unit_price: line.unit_price,
                quantity: line.quantity,
                line_total: line.line_total,
            },
        )
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?;
    }

    cart::repository::delete_items_by_cart_id(&mut *tx, cart.id)
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit order creation: {}", err);
        response::Error::FailedToCreateOrder
    })?;

    tracing::info!("Order {} created", order.id);

    Ok(response::Success::OrderCreated(order))
}
