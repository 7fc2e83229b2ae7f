//! In-memory state of the order desk: orders, session bills and the
//! sync state of every status change sent to the backend.

use super::aggregate::{Order, OrderId};
use super::tab::OrderTab;
use crate::domain::a002_bill::BillRecord;
use crate::enums::OrderStatus;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Whether the local status of an order is known to the backend
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Synced,
    PendingSync,
    /// The backend rejected or never received the change; the local status
    /// is kept anyway.
    Failed(String),
}

/// Handle of one in-flight status change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTicket {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub seq: u64,
}

#[derive(Debug, Clone)]
struct SyncEntry {
    seq: u64,
    state: SyncState,
}

#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
    bills: Vec<BillRecord>,
    sync: HashMap<OrderId, SyncEntry>,
    next_seq: u64,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Self::default()
        }
    }

    /// Replace the order list after a (re)load.
    ///
    /// Orders with a change still in flight keep their local status and
    /// their ticket, so the pending response can settle them. Every other
    /// order takes the server's status and counts as synced. Bills of the
    /// session are kept.
    pub fn replace_orders(&mut self, mut orders: Vec<Order>) {
        for order in &mut orders {
            if !self.is_pending(&order.id) {
                continue;
            }
            if let Some(local) = self.order(&order.id) {
                order.status = local.status;
            }
        }

        self.sync.retain(|id, entry| {
            entry.state == SyncState::PendingSync && orders.iter().any(|order| &order.id == id)
        });
        self.orders = orders;
    }

    fn is_pending(&self, id: &OrderId) -> bool {
        self.sync
            .get(id)
            .is_some_and(|entry| entry.state == SyncState::PendingSync)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn bills(&self) -> &[BillRecord] {
        &self.bills
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    pub fn is_billed(&self, id: &OrderId) -> bool {
        self.bills.iter().any(|bill| &bill.order_id == id)
    }

    pub fn sync_state(&self, id: &OrderId) -> SyncState {
        self.sync
            .get(id)
            .map(|entry| entry.state.clone())
            .unwrap_or_default()
    }

    pub fn filtered(&self, tab: OrderTab) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|order| tab.matches(order, self.is_billed(&order.id)))
            .cloned()
            .collect()
    }

    pub fn count(&self, tab: OrderTab) -> usize {
        self.orders
            .iter()
            .filter(|order| tab.matches(order, self.is_billed(&order.id)))
            .count()
    }

    /// Apply a status locally and open a ticket for the backend request.
    ///
    /// Returns `None` when the order is unknown.
    pub fn begin_status_update(
        &mut self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Option<StatusTicket> {
        let order = self.orders.iter_mut().find(|o| &o.id == order_id)?;
        order.status = status;

        self.next_seq += 1;
        let seq = self.next_seq;
        self.sync.insert(
            order_id.clone(),
            SyncEntry {
                seq,
                state: SyncState::PendingSync,
            },
        );

        Some(StatusTicket {
            order_id: order_id.clone(),
            status,
            seq,
        })
    }

    /// Record the backend outcome of a ticket.
    ///
    /// Returns `false` when a newer change for the same order superseded it;
    /// the outcome is then discarded.
    pub fn finish_status_update(
        &mut self,
        ticket: &StatusTicket,
        result: Result<(), String>,
    ) -> bool {
        let Some(entry) = self.sync.get_mut(&ticket.order_id) else {
            return false;
        };
        if entry.seq != ticket.seq {
            return false;
        }
        entry.state = match result {
            Ok(()) => SyncState::Synced,
            Err(reason) => SyncState::Failed(reason),
        };
        true
    }

    /// Synthesize a bill for the order, keep it for the session and move the
    /// order to `COMPLETED`.
    pub fn print_bill(
        &mut self,
        order_id: &OrderId,
        now: DateTime<Utc>,
    ) -> Option<(BillRecord, StatusTicket)> {
        let bill = BillRecord::from_order(self.order(order_id)?, now);
        self.bills.push(bill.clone());
        let ticket = self.begin_status_update(order_id, OrderStatus::Completed)?;
        Some((bill, ticket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_shop_order::aggregate::{Consumer, OrderItem};

    fn order(id: i64, status: OrderStatus, items: &[(f64, u32)]) -> Order {
        Order {
            id: OrderId::from(id),
            consumer: Consumer {
                name: format!("Customer {}", id),
                username: format!("c{}", id),
            },
            items: items
                .iter()
                .enumerate()
                .map(|(n, (price, quantity))| OrderItem {
                    id: format!("p{}", n),
                    name: format!("Product {}", n),
                    price: *price,
                    image: String::new(),
                    quantity: *quantity,
                })
                .collect(),
            status,
            created_at: Utc::now(),
        }
    }

    fn board() -> OrderBoard {
        OrderBoard::from_orders(vec![
            order(1, OrderStatus::Pending, &[(10.0, 1)]),
            order(2, OrderStatus::Confirmed, &[(10.0, 2), (5.0, 1)]),
            order(3, OrderStatus::Cancelled, &[(1.0, 1)]),
            order(4, OrderStatus::Completed, &[(1.0, 1)]),
            order(5, OrderStatus::Pending, &[(2.0, 3)]),
        ])
    }

    fn ids(orders: &[Order]) -> Vec<OrderId> {
        orders.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn test_tabs_filter_by_status() {
        let board = board();
        let pending = board.filtered(OrderTab::Orders);
        assert_eq!(ids(&pending), vec![OrderId::from(1), OrderId::from(5)]);
        assert!(pending.iter().all(|o| o.status == OrderStatus::Pending));

        let accepted = board.filtered(OrderTab::Accepted);
        assert_eq!(ids(&accepted), vec![OrderId::from(2)]);

        // Completed without a bill from this session shows nowhere.
        let history = board.filtered(OrderTab::History);
        assert_eq!(ids(&history), vec![OrderId::from(3)]);
        assert_eq!(board.count(OrderTab::Orders), 2);
    }

    #[test]
    fn test_accept_applies_on_success_and_failure() {
        for outcome in [Ok(()), Err("network down".to_string())] {
            let mut board = board();
            let id = OrderId::from(1);
            let ticket = board
                .begin_status_update(&id, OrderStatus::Confirmed)
                .unwrap();
            assert_eq!(board.sync_state(&id), SyncState::PendingSync);
            assert_eq!(board.order(&id).unwrap().status, OrderStatus::Confirmed);

            let failed = outcome.is_err();
            assert!(board.finish_status_update(&ticket, outcome));
            assert_eq!(board.order(&id).unwrap().status, OrderStatus::Confirmed);
            if failed {
                assert_eq!(
                    board.sync_state(&id),
                    SyncState::Failed("network down".to_string())
                );
            } else {
                assert_eq!(board.sync_state(&id), SyncState::Synced);
            }
            assert!(ids(&board.filtered(OrderTab::Accepted)).contains(&id));
        }
    }

    #[test]
    fn test_reject_and_cancel_move_to_history() {
        let mut board = board();
        board.begin_status_update(&OrderId::from(5), OrderStatus::Cancelled);
        board.begin_status_update(&OrderId::from(2), OrderStatus::Cancelled);
        let history = ids(&board.filtered(OrderTab::History));
        assert!(history.contains(&OrderId::from(5)));
        assert!(history.contains(&OrderId::from(2)));
        assert!(board.filtered(OrderTab::Accepted).is_empty());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut board = board();
        let id = OrderId::from(2);
        let first = board.begin_status_update(&id, OrderStatus::Cancelled).unwrap();
        let second = board.begin_status_update(&id, OrderStatus::Confirmed).unwrap();

        assert!(board.finish_status_update(&second, Ok(())));
        assert!(!board.finish_status_update(&first, Err("timeout".to_string())));
        assert_eq!(board.sync_state(&id), SyncState::Synced);
        assert_eq!(board.order(&id).unwrap().status, OrderStatus::Confirmed);
    }

    #[test]
    fn test_unknown_order_is_noop() {
        let mut board = board();
        let missing = OrderId::from("nope");
        assert!(board
            .begin_status_update(&missing, OrderStatus::Confirmed)
            .is_none());
        assert!(board.print_bill(&missing, Utc::now()).is_none());
        assert!(board.bills().is_empty());
        assert_eq!(board.sync_state(&missing), SyncState::Synced);
    }

    #[test]
    fn test_print_bill() {
        let mut board = board();
        let id = OrderId::from(2);
        let (bill, ticket) = board.print_bill(&id, Utc::now()).unwrap();

        assert_eq!(bill.total_amount, 25.0);
        assert_eq!(bill.order_id, id);
        assert_eq!(ticket.status, OrderStatus::Completed);
        assert_eq!(board.order(&id).unwrap().status, OrderStatus::Completed);
        assert_eq!(board.bills().len(), 1);
        assert!(board.is_billed(&id));

        assert!(board.filtered(OrderTab::Accepted).is_empty());
        assert!(ids(&board.filtered(OrderTab::History)).contains(&id));

        board.finish_status_update(&ticket, Err("502".to_string()));
        assert!(ids(&board.filtered(OrderTab::History)).contains(&id));
    }

    #[test]
    fn test_tabs_are_disjoint() {
        let mut board = board();
        let (_, ticket) = board.print_bill(&OrderId::from(2), Utc::now()).unwrap();
        board.finish_status_update(&ticket, Ok(()));
        // A reload that still reports the billed order as confirmed
        let mut reloaded = board.orders().to_vec();
        reloaded[1].status = OrderStatus::Confirmed;
        board.replace_orders(reloaded);

        for order in board.orders() {
            let hits = OrderTab::all()
                .iter()
                .filter(|tab| tab.matches(order, board.is_billed(&order.id)))
                .count();
            assert!(hits <= 1, "order {} is in {} tabs", order.id, hits);
        }
    }

    #[test]
    fn test_replace_orders_keeps_bills() {
        let mut board = board();
        board.print_bill(&OrderId::from(2), Utc::now());
        board.replace_orders(vec![order(9, OrderStatus::Pending, &[(1.0, 1)])]);
        assert_eq!(board.bills().len(), 1);
        assert_eq!(board.orders().len(), 1);
        assert_eq!(board.sync_state(&OrderId::from(2)), SyncState::Synced);
    }

    #[test]
    fn test_reload_clears_failed_change() {
        let mut board = board();
        let id = OrderId::from(1);
        let ticket = board.begin_status_update(&id, OrderStatus::Confirmed).unwrap();
        board.finish_status_update(&ticket, Err("502".to_string()));

        board.replace_orders(vec![order(1, OrderStatus::Pending, &[(10.0, 1)])]);

        assert_eq!(board.order(&id).unwrap().status, OrderStatus::Pending);
        assert_eq!(board.sync_state(&id), SyncState::Synced);
        assert!(ids(&board.filtered(OrderTab::Orders)).contains(&id));
    }

    #[test]
    fn test_reload_during_update_keeps_local_status() {
        let mut board = board();
        let id = OrderId::from(1);
        let ticket = board.begin_status_update(&id, OrderStatus::Confirmed).unwrap();

        board.replace_orders(vec![order(1, OrderStatus::Pending, &[(10.0, 1)])]);
        assert_eq!(board.order(&id).unwrap().status, OrderStatus::Confirmed);
        assert_eq!(board.sync_state(&id), SyncState::PendingSync);

        assert!(board.finish_status_update(&ticket, Ok(())));
        assert_eq!(board.order(&id).unwrap().status, OrderStatus::Confirmed);
        assert_eq!(board.sync_state(&id), SyncState::Synced);
    }

    #[test]
    fn test_reload_during_update_then_failure() {
        let mut board = board();
        let id = OrderId::from(1);
        let ticket = board.begin_status_update(&id, OrderStatus::Confirmed).unwrap();

        board.replace_orders(vec![order(1, OrderStatus::Pending, &[(10.0, 1)])]);
        assert!(board.finish_status_update(&ticket, Err("timeout".to_string())));
        assert_eq!(
            board.sync_state(&id),
            SyncState::Failed("timeout".to_string())
        );
    }
}
