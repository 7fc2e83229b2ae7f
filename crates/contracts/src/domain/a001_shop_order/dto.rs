use super::aggregate::OrderId;
use crate::enums::OrderStatus;
use crate::system::shop::ShopId;
use serde::{Deserialize, Serialize};

/// Body of `POST /shop/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopOrdersRequest {
    pub shop_id: ShopId,
}

/// Response of `POST /shop/orders`.
///
/// Rows stay untyped here and are validated one by one, so that a single bad
/// row does not discard the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopOrdersResponse {
    #[serde(default)]
    pub message: Option<Vec<serde_json::Value>>,
}

/// Body of `PUT /shop/orders/update-status`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub order_id: OrderId,
    pub status: OrderStatus,
}
