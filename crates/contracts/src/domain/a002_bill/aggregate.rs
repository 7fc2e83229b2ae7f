use crate::domain::a001_shop_order::aggregate::{Order, OrderId};
use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(pub Uuid);

impl BillId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for BillId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BillId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Bill line: one per order item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: String,
    pub total: f64,
}

/// Receipt synthesized on the client at print time.
///
/// Never sent to the backend; it lives for the browser session only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub id: BillId,
    pub order_id: OrderId,
    pub customer_name: String,
    pub customer_username: String,
    pub items: Vec<BillItem>,
    pub total_amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl BillRecord {
    pub fn from_order(order: &Order, now: DateTime<Utc>) -> Self {
        let items: Vec<BillItem> = order
            .items
            .iter()
            .map(|p| BillItem {
                name: p.name.clone(),
                price: p.price,
                quantity: p.quantity,
                image: p.image.clone(),
                total: p.line_total(),
            })
            .collect();
        let total_amount = items.iter().map(|i| i.total).sum();

        Self {
            id: BillId::new_v4(),
            order_id: order.id.clone(),
            customer_name: order.consumer.name.clone(),
            customer_username: order.consumer.username.clone(),
            items,
            total_amount,
            timestamp: now,
        }
    }
}
