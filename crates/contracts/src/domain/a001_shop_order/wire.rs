//! Backend row format: one row per product per order.

use super::aggregate::{Consumer, OrderId, OrderItem};
use super::error::OrderLineError;
use crate::enums::OrderStatus;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Product as embedded in a backend order row
#[derive(Debug, Clone, PartialEq)]
pub struct LineProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// Validated backend order row
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub id: OrderId,
    pub consumer: Consumer,
    pub product: LineProduct,
    pub quantity: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderLine {
    /// Validate one row of the `message` array.
    pub fn from_json(value: &Value) -> Result<Self, OrderLineError> {
        if !value.is_object() {
            return Err(OrderLineError::NotAnObject);
        }

        let id = match value.get("id") {
            None | Some(Value::Null) => return Err(OrderLineError::MissingField("id")),
            Some(raw) => OrderId::from_json(raw)
                .ok_or_else(|| OrderLineError::invalid("id", "expected number or non-empty string"))?,
        };

        let consumer = value
            .get("consumer")
            .ok_or(OrderLineError::MissingField("consumer"))?;
        let consumer = Consumer {
            name: str_field(consumer, "name").ok_or(OrderLineError::MissingField("consumer.name"))?,
            username: str_field(consumer, "username").unwrap_or_default(),
        };

        let product = value
            .get("product")
            .filter(|p| p.is_object())
            .ok_or(OrderLineError::MissingField("product"))?;
        let product = LineProduct {
            id: product
                .get("id")
                .and_then(id_string)
                .ok_or(OrderLineError::MissingField("product.id"))?,
            name: str_field(product, "name").ok_or(OrderLineError::MissingField("product.name"))?,
            price: price_field(product)?,
            image: str_field(product, "image").unwrap_or_default(),
        };

        let quantity = quantity_field(value)?;

        let status = str_field(value, "status").ok_or(OrderLineError::MissingField("status"))?;
        let status = OrderStatus::from_code(&status).ok_or(OrderLineError::UnknownStatus(status))?;

        let created_at =
            str_field(value, "createdAt").ok_or(OrderLineError::MissingField("createdAt"))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| OrderLineError::InvalidTimestamp(created_at))?;

        Ok(Self {
            id,
            consumer,
            product,
            quantity,
            status,
            created_at,
        })
    }

    /// Product entry this row contributes to its order
    pub fn to_item(&self) -> OrderItem {
        OrderItem {
            id: self.product.id.clone(),
            name: self.product.name.clone(),
            price: self.product.price,
            image: self.product.image.clone(),
            quantity: self.quantity,
        }
    }
}

fn str_field(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(String::from)
}

fn id_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// Decimal columns may be serialized as strings
fn price_field(product: &Value) -> Result<f64, OrderLineError> {
    let price = match product.get("price") {
        None | Some(Value::Null) => return Err(OrderLineError::MissingField("product.price")),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .ok_or_else(|| OrderLineError::invalid("product.price", "expected a number"))?;

    if !price.is_finite() || price < 0.0 {
        return Err(OrderLineError::invalid(
            "product.price",
            format!("{} is not a valid price", price),
        ));
    }
    Ok(price)
}

fn quantity_field(line: &Value) -> Result<u32, OrderLineError> {
    let raw = match line.get("quantity") {
        None | Some(Value::Null) => return Err(OrderLineError::MissingField("quantity")),
        Some(v) => v,
    };
    let qty = raw
        .as_f64()
        .filter(|q| q.is_finite() && *q >= 0.0 && q.fract() == 0.0 && *q <= f64::from(u32::MAX))
        .ok_or_else(|| OrderLineError::invalid("quantity", format!("{} is not a whole count", raw)))?;
    Ok(qty as u32)
}
