use crate::enums::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Order identifier as issued by the shop backend.
///
/// The backend may send ids as JSON numbers or strings. Both are kept as
/// received, without trimming or numeric coercion, so that grouping compares
/// the raw values and status updates echo the id back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(Number),
    Text(String),
}

impl OrderId {
    /// Empty strings and non-scalar values are not ids.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Some(OrderId::Number(n.clone())),
            serde_json::Value::String(s) if !s.is_empty() => Some(OrderId::Text(s.clone())),
            _ => None,
        }
    }
}

impl From<i64> for OrderId {
    fn from(n: i64) -> Self {
        OrderId::Number(n.into())
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        OrderId::Text(s.to_string())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{}", n),
            OrderId::Text(s) => f.write_str(s),
        }
    }
}

/// Customer who placed the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumer {
    pub name: String,
    #[serde(default)]
    pub username: String,
}

impl Consumer {
    /// Avatar letter shown on the order card
    pub fn initial(&self) -> char {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}

/// One product entry of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Customer order merged from the per-product rows of the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub consumer: Consumer,
    /// Product entries in arrival order
    #[serde(rename = "product")]
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(price: f64, quantity: u32) -> OrderItem {
        OrderItem {
            id: "p".to_string(),
            name: "Item".to_string(),
            price,
            image: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_order_id_from_json() {
        assert_eq!(OrderId::from_json(&json!(7)), Some(OrderId::from(7)));
        assert_eq!(OrderId::from_json(&json!("ord_1")), Some(OrderId::from("ord_1")));
        assert_eq!(OrderId::from_json(&json!("")), None);
        assert_eq!(OrderId::from_json(&json!(null)), None);
        assert_eq!(OrderId::from_json(&json!([1])), None);
    }

    #[test]
    fn test_order_id_kept_as_received() {
        let padded = OrderId::from_json(&json!(" a1 ")).unwrap();
        assert_eq!(padded, OrderId::from(" a1 "));
        assert_ne!(padded, OrderId::from("a1"));
        assert_eq!(OrderId::from_json(&json!("  ")), Some(OrderId::from("  ")));

        let big: serde_json::Value = serde_json::from_str("9223372036854775808").unwrap();
        let float: serde_json::Value = serde_json::from_str("1.0").unwrap();
        for raw in [big, float, json!(-3), json!("a1")] {
            let id = OrderId::from_json(&raw).unwrap();
            assert_eq!(serde_json::to_value(&id).unwrap(), raw);
        }
        assert_eq!(
            OrderId::from_json(&serde_json::from_str("9223372036854775808").unwrap())
                .unwrap()
                .to_string(),
            "9223372036854775808"
        );
    }

    #[test]
    fn test_consumer_initial() {
        let c = Consumer {
            name: "  ravi".to_string(),
            username: String::new(),
        };
        assert_eq!(c.initial(), 'R');
        let empty = Consumer {
            name: String::new(),
            username: String::new(),
        };
        assert_eq!(empty.initial(), '?');
    }

    #[test]
    fn test_order_total() {
        let order = Order {
            id: OrderId::from(1),
            consumer: Consumer {
                name: "A".to_string(),
                username: "a".to_string(),
            },
            items: vec![item(10.0, 2), item(5.0, 1)],
            status: OrderStatus::Confirmed,
            created_at: Utc::now(),
        };
        assert_eq!(order.total(), 25.0);
    }
}
