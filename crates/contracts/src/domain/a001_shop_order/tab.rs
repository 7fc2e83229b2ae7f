use super::aggregate::Order;
use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

/// Order desk views. Each order belongs to at most one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderTab {
    #[default]
    Orders,
    Accepted,
    History,
}

impl OrderTab {
    pub fn key(&self) -> &'static str {
        match self {
            OrderTab::Orders => "orders",
            OrderTab::Accepted => "accepted",
            OrderTab::History => "history",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderTab::Orders => "Orders",
            OrderTab::Accepted => "Accepted Orders",
            OrderTab::History => "History",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            OrderTab::Orders => "No pending orders at the moment.",
            OrderTab::Accepted => "No accepted orders to show.",
            OrderTab::History => "No order history available.",
        }
    }

    pub fn all() -> [OrderTab; 3] {
        [OrderTab::Orders, OrderTab::Accepted, OrderTab::History]
    }

    /// `billed` tells whether a bill was printed for the order this session.
    ///
    /// Pending and confirmed orders never show in history, even when billed,
    /// so that the three views stay disjoint.
    pub fn matches(&self, order: &Order, billed: bool) -> bool {
        match (self, order.status) {
            (OrderTab::Orders, status) => status == OrderStatus::Pending,
            (OrderTab::Accepted, status) => status == OrderStatus::Confirmed,
            (OrderTab::History, OrderStatus::Cancelled) => true,
            (OrderTab::History, OrderStatus::Completed) => billed,
            (OrderTab::History, _) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde() {
        for tab in OrderTab::all() {
            assert_eq!(serde_json::to_value(tab).unwrap(), tab.key());
        }
        assert_eq!(OrderTab::default(), OrderTab::Orders);
    }
}
