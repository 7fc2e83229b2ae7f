//! ViewModel for the order desk

use super::model::{fetch_shop_orders, update_order_status};
use crate::domain::a002_bill::store::{open_bill, BillingStore};
use crate::layout::global_context::AppGlobalContext;
use chrono::Utc;
use contracts::domain::a001_shop_order::{
    Order, OrderBoard, OrderId, OrderTab, StatusTicket, SyncState,
};
use contracts::enums::OrderStatus;
use contracts::system::shop::ShopId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone)]
pub struct OrderDeskVm {
    pub shop_id: Option<ShopId>,
    pub board: RwSignal<OrderBoard>,
    pub active_tab: RwSignal<OrderTab>,
    /// Order whose items are expanded
    pub viewing: RwSignal<Option<OrderId>>,
    pub loading: RwSignal<bool>,

    tabs_store: AppGlobalContext,
    billing: BillingStore,
}

impl OrderDeskVm {
    pub fn new(
        shop_id: Option<ShopId>,
        tabs_store: AppGlobalContext,
        billing: BillingStore,
    ) -> Self {
        Self {
            shop_id,
            board: RwSignal::new(OrderBoard::new()),
            active_tab: RwSignal::new(OrderTab::default()),
            viewing: RwSignal::new(None),
            loading: RwSignal::new(true),
            tabs_store,
            billing,
        }
    }

    /// Orders of the active tab. Sync state changes leave the list as is,
    /// so the cards are not rebuilt for them.
    pub fn filtered_orders(&self) -> Memo<Vec<Order>> {
        let board = self.board;
        let active_tab = self.active_tab;
        Memo::new(move |_| {
            let tab = active_tab.get();
            board.with(|b| b.filtered(tab))
        })
    }

    pub fn tab_count(&self, tab: OrderTab) -> Memo<usize> {
        let board = self.board;
        Memo::new(move |_| board.with(|b| b.count(tab)))
    }

    pub fn bills_count(&self) -> Signal<usize> {
        let board = self.board;
        Signal::derive(move || board.with(|b| b.bills().len()))
    }

    pub fn sync_state(&self, order_id: OrderId) -> Signal<SyncState> {
        let board = self.board;
        Signal::derive(move || board.with(|b| b.sync_state(&order_id)))
    }

    pub fn set_tab(&self, tab: OrderTab) {
        self.active_tab.set(tab);
    }

    pub fn toggle_view(&self, order_id: &OrderId) {
        self.viewing.update(|current| {
            if current.as_ref() == Some(order_id) {
                *current = None;
            } else {
                *current = Some(order_id.clone());
            }
        });
    }

    /// Fetch the shop's orders. The loading flag is cleared once the attempt
    /// ends, whatever its outcome; failures leave the previous list in place.
    pub fn load(&self) {
        let vm = self.clone();
        vm.loading.set(true);

        spawn_local(async move {
            match vm.shop_id.as_ref() {
                None => log::warn!("No shop selected, orders not requested"),
                Some(shop_id) => match fetch_shop_orders(shop_id).await {
                    Ok(orders) => {
                        log::info!("Loaded {} orders for shop {}", orders.len(), shop_id);
                        vm.board.update(|b| b.replace_orders(orders));
                    }
                    Err(e) => log::error!("Error fetching orders: {}", e),
                },
            }
            vm.loading.set(false);
        });
    }

    pub fn accept(&self, order_id: OrderId) {
        self.update_status(order_id, OrderStatus::Confirmed);
    }

    pub fn reject(&self, order_id: OrderId) {
        self.update_status(order_id, OrderStatus::Cancelled);
    }

    pub fn cancel(&self, order_id: OrderId) {
        self.update_status(order_id, OrderStatus::Cancelled);
    }

    /// Bill the order, move it to completed and open the bill view.
    pub fn print_bill(&self, order_id: OrderId) {
        let mut printed = None;
        self.board
            .update(|b| printed = b.print_bill(&order_id, Utc::now()));

        let Some((bill, ticket)) = printed else {
            log::warn!("Cannot print bill, order {} not found", order_id);
            return;
        };
        log::info!(
            "Bill {} generated for order {}: {}",
            bill.id.value(),
            bill.order_id,
            bill.total_amount
        );

        self.send_status(ticket);
        open_bill(self.tabs_store, self.billing, bill);
    }

    fn update_status(&self, order_id: OrderId, status: OrderStatus) {
        let mut ticket = None;
        self.board
            .update(|b| ticket = b.begin_status_update(&order_id, status));

        match ticket {
            Some(ticket) => self.send_status(ticket),
            None => log::warn!("Cannot set {} on unknown order {}", status, order_id),
        }
    }

    fn send_status(&self, ticket: StatusTicket) {
        let board = self.board;
        spawn_local(async move {
            let result = update_order_status(&ticket.order_id, ticket.status).await;
            if let Err(e) = &result {
                log::error!("Error updating order status: {}", e);
            }
            board.update(|b| {
                if !b.finish_status_update(&ticket, result) {
                    log::debug!(
                        "Outdated status response for order {} ignored",
                        ticket.order_id
                    );
                }
            });
        });
    }
}
