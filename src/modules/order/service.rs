use super::repository::OrderStatus;
use crate::modules::cart::repository::CartLine;
use itertools::Itertools;

#[derive(Debug, PartialEq)]
pub enum CartRejection {
    Empty,
    ItemsNotAvailable,
    MultipleRestaurants,
}

/// Checks that the cart can become a single order and returns the restaurant
/// every line belongs to.
pub fn checkout_restaurant(lines: &[CartLine]) -> Result<String, CartRejection> {
    if lines.is_empty() {
        return Err(CartRejection::Empty);
    }

    if lines.iter().any(|line| !line.is_available) {
        return Err(CartRejection::ItemsNotAvailable);
    }

    let restaurant_ids = lines
        .iter()
        .map(|line| line.restaurant_id.clone())
        .unique()
        .collect::<Vec<_>>();

    match restaurant_ids.as_slice() {
        [restaurant_id] => Ok(restaurant_id.clone()),
        _ => Err(CartRejection::MultipleRestaurants),
    }
}

#[derive(Debug, PartialEq)]
pub enum CancelRejection {
    AlreadyCancelled,
    AlreadyPaid,
    NotPending(OrderStatus),
}

/// Users may only cancel orders that are still pending.
pub fn check_cancellable(status: OrderStatus) -> Result<(), CancelRejection> {
    match status {
        OrderStatus::Pending => Ok(()),
        OrderStatus::Cancelled => Err(CancelRejection::AlreadyCancelled),
        OrderStatus::Confirmed => Err(CancelRejection::AlreadyPaid),
        status => Err(CancelRejection::NotPending(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::BigDecimal;

    fn line(restaurant_id: &str, is_available: bool) -> CartLine {
        CartLine {
            menu_item_id: String::from("m1"),
            quantity: 1,
            unit_price: BigDecimal::from(5),
            line_total: BigDecimal::from(5),
            name: String::from("Soup"),
            image_path: None,
            restaurant_id: restaurant_id.to_string(),
            category_id: String::from("c1"),
            is_available,
        }
    }

    #[test]
    fn empty_cart_cannot_be_checked_out() {
        assert_eq!(checkout_restaurant(&[]), Err(CartRejection::Empty));
    }

    #[test]
    fn unavailable_items_block_checkout() {
        let lines = vec![line("r1", true), line("r1", false)];

        assert_eq!(
            checkout_restaurant(&lines),
            Err(CartRejection::ItemsNotAvailable)
        );
    }

    #[test]
    fn lines_must_share_a_restaurant() {
        let mixed = vec![line("r1", true), line("r2", true)];
        let single = vec![line("r1", true), line("r1", true)];

        assert_eq!(
            checkout_restaurant(&mixed),
            Err(CartRejection::MultipleRestaurants)
        );
        assert_eq!(checkout_restaurant(&single), Ok(String::from("r1")));
    }

    #[test]
    fn only_pending_orders_can_be_cancelled() {
        assert_eq!(check_cancellable(OrderStatus::Pending), Ok(()));
        assert_eq!(
            check_cancellable(OrderStatus::Cancelled),
            Err(CancelRejection::AlreadyCancelled)
        );
        assert_eq!(
            check_cancellable(OrderStatus::Confirmed),
            Err(CancelRejection::AlreadyPaid)
        );
        assert_eq!(
            check_cancellable(OrderStatus::OnTheWay),
            Err(CancelRejection::NotPending(OrderStatus::OnTheWay))
        );
    }
}
