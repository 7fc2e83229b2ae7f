//! API layer for the order desk

use crate::shared::api_utils::api_url;
use contracts::domain::a001_shop_order::dto::{
    ShopOrdersRequest, ShopOrdersResponse, UpdateStatusRequest,
};
use contracts::domain::a001_shop_order::{group_order_lines, parse_order_lines, Order, OrderId};
use contracts::enums::OrderStatus;
use contracts::system::shop::ShopId;
use gloo_net::http::Request;

/// Fetch the shop's order rows and merge them into orders.
///
/// Rows that fail validation are logged and skipped.
pub async fn fetch_shop_orders(shop_id: &ShopId) -> Result<Vec<Order>, String> {
    let request = ShopOrdersRequest {
        shop_id: shop_id.clone(),
    };

    let response = Request::post(&api_url("/shop/orders"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to fetch orders: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let body = response
        .json::<ShopOrdersResponse>()
        .await
        .map_err(|e| format!("Failed to parse orders: {}", e))?;

    let rows = body.message.unwrap_or_default();
    let parsed = parse_order_lines(&rows);
    for rejected in &parsed.rejected {
        log::warn!("Skipping order row #{}: {}", rejected.index, rejected.error);
    }
    log::info!(
        "Received {} order rows, {} valid",
        rows.len(),
        parsed.lines.len()
    );

    Ok(group_order_lines(parsed.lines))
}

pub async fn update_order_status(order_id: &OrderId, status: OrderStatus) -> Result<(), String> {
    let request = UpdateStatusRequest {
        order_id: order_id.clone(),
        status,
    };

    let response = Request::put(&api_url("/shop/orders/update-status"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update status: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    Ok(())
}
