use super::repository::CartLine;
use sqlx::types::BigDecimal;

/// Parses a requested quantity. Only positive integers are accepted.
pub fn parse_quantity(raw: &str) -> Option<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|quantity| *quantity > 0)
}

pub fn total(lines: &[CartLine]) -> BigDecimal {
    lines
        .iter()
        .fold(BigDecimal::from(0), |sum, line| sum + &line.line_total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn line(menu_item_id: &str, quantity: i32, unit_price: &str) -> CartLine {
        let unit_price = BigDecimal::from_str(unit_price).unwrap();
        CartLine {
            menu_item_id: menu_item_id.to_string(),
            quantity,
            line_total: unit_price.clone() * BigDecimal::from(quantity),
            unit_price,
            name: String::from("Burger"),
            image_path: None,
            restaurant_id: String::from("r1"),
            category_id: String::from("c1"),
            is_available: true,
        }
    }

    #[test]
    fn total_sums_line_totals() {
        let lines = vec![line("a", 2, "4.50"), line("b", 1, "10.25")];

        assert_eq!(total(&lines), BigDecimal::from_str("19.25").unwrap());
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(total(&[]), BigDecimal::from(0));
    }

    #[test]
    fn quantity_must_be_a_positive_integer() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 1 "), Some(1));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-2"), None);
        assert_eq!(parse_quantity("1.5"), None);
        assert_eq!(parse_quantity("two"), None);
    }
}
