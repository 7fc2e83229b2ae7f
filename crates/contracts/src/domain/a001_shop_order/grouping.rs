//! Merge per-product backend rows into order aggregates.

use super::aggregate::{Order, OrderId};
use super::error::OrderLineError;
use super::wire::OrderLine;
use serde_json::Value;
use std::collections::HashMap;

/// Row of the `message` array that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    pub index: usize,
    pub error: OrderLineError,
}

/// Result of validating a whole `message` array
#[derive(Debug, Clone, Default)]
pub struct ParsedLines {
    pub lines: Vec<OrderLine>,
    pub rejected: Vec<RejectedLine>,
}

pub fn parse_order_lines(values: &[Value]) -> ParsedLines {
    let mut parsed = ParsedLines::default();
    for (index, value) in values.iter().enumerate() {
        match OrderLine::from_json(value) {
            Ok(line) => parsed.lines.push(line),
            Err(error) => parsed.rejected.push(RejectedLine { index, error }),
        }
    }
    parsed
}

/// Group rows by order id.
///
/// The first row seen for an id supplies consumer, status and creation time;
/// every row appends its product in arrival order. Orders keep first-seen order.
pub fn group_order_lines<I>(lines: I) -> Vec<Order>
where
    I: IntoIterator<Item = OrderLine>,
{
    let mut orders: Vec<Order> = Vec::new();
    let mut index: HashMap<OrderId, usize> = HashMap::new();

    for line in lines {
        let item = line.to_item();
        match index.get(&line.id) {
            Some(&pos) => orders[pos].items.push(item),
            None => {
                index.insert(line.id.clone(), orders.len());
                orders.push(Order {
                    id: line.id,
                    consumer: line.consumer,
                    items: vec![item],
                    status: line.status,
                    created_at: line.created_at,
                });
            }
        }
    }

    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::OrderStatus;
    use serde_json::json;

    fn row(id: Value, product: &str, price: f64, qty: u32, status: &str) -> Value {
        json!({
            "id": id,
            "consumer": { "name": "Kiran", "username": "kiran" },
            "product": { "id": product, "name": product.to_uppercase(), "price": price, "image": "" },
            "quantity": qty,
            "status": status,
            "createdAt": "2025-06-01T10:00:00Z"
        })
    }

    #[test]
    fn test_two_lines_one_order() {
        let values = vec![
            row(json!(1), "a", 10.0, 1, "PENDING"),
            row(json!(1), "b", 5.0, 2, "PENDING"),
        ];
        let parsed = parse_order_lines(&values);
        assert!(parsed.rejected.is_empty());

        let orders = group_order_lines(parsed.lines);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, OrderId::from(1));
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[0].items.len(), 2);
        assert_eq!(orders[0].items[0].id, "a");
        assert_eq!(orders[0].items[1].id, "b");
        assert_eq!(orders[0].items[1].quantity, 2);
    }

    #[test]
    fn test_item_count_matches_line_count() {
        let values = vec![
            row(json!(1), "a", 1.0, 1, "PENDING"),
            row(json!("x"), "b", 1.0, 1, "CONFIRMED"),
            row(json!(1), "c", 1.0, 1, "PENDING"),
            row(json!(2), "d", 1.0, 1, "CANCELLED"),
            row(json!("x"), "e", 1.0, 1, "CONFIRMED"),
            row(json!(1), "f", 1.0, 1, "PENDING"),
        ];
        let orders = group_order_lines(parse_order_lines(&values).lines);

        let ids: Vec<String> = orders.iter().map(|o| o.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "x", "2"]);
        assert_eq!(orders[0].items.len(), 3);
        assert_eq!(orders[1].items.len(), 2);
        assert_eq!(orders[2].items.len(), 1);
    }

    #[test]
    fn test_ids_group_by_raw_value() {
        let values = vec![
            row(json!(" a1 "), "a", 1.0, 1, "PENDING"),
            row(json!("a1"), "b", 1.0, 1, "PENDING"),
            row(serde_json::from_str("1.0").unwrap(), "c", 1.0, 1, "PENDING"),
            row(serde_json::from_str("9223372036854775808").unwrap(), "d", 1.0, 1, "PENDING"),
            row(json!("a1"), "e", 1.0, 1, "PENDING"),
        ];
        let parsed = parse_order_lines(&values);
        assert!(parsed.rejected.is_empty());

        let orders = group_order_lines(parsed.lines);
        let ids: Vec<String> = orders.iter().map(|o| o.id.to_string()).collect();
        assert_eq!(ids, vec![" a1 ", "a1", "1.0", "9223372036854775808"]);
        assert_eq!(orders[1].items.len(), 2);
        assert_eq!(orders[0].id, OrderId::from(" a1 "));
    }

    #[test]
    fn test_first_line_wins_for_scalars() {
        let values = vec![
            row(json!(5), "a", 1.0, 1, "PENDING"),
            row(json!(5), "b", 1.0, 1, "CONFIRMED"),
        ];
        let orders = group_order_lines(parse_order_lines(&values).lines);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[test]
    fn test_malformed_rows_are_excluded() {
        let values = vec![
            row(json!(1), "a", 1.0, 1, "PENDING"),
            json!("garbage"),
            row(json!(1), "b", 1.0, 1, "NOPE"),
        ];
        let parsed = parse_order_lines(&values);
        assert_eq!(parsed.lines.len(), 1);
        assert_eq!(parsed.rejected.len(), 2);
        assert_eq!(parsed.rejected[0].index, 1);
        assert_eq!(parsed.rejected[0].error, OrderLineError::NotAnObject);
        assert_eq!(parsed.rejected[1].index, 2);

        let orders = group_order_lines(parsed.lines);
        assert_eq!(orders[0].items.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_order_lines(Vec::new()).is_empty());
        assert!(parse_order_lines(&[]).lines.is_empty());
    }
}
