//! Hand-over of bill records to the bill view.
//!
//! Records are kept in memory only and are gone after a reload.

use super::bill_tab_key;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a002_bill::{BillId, BillRecord};
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Copy)]
pub struct BillingStore {
    bills: RwSignal<HashMap<BillId, BillRecord>>,
}

impl BillingStore {
    pub fn new() -> Self {
        Self {
            bills: RwSignal::new(HashMap::new()),
        }
    }

    pub fn insert(&self, bill: BillRecord) {
        self.bills.update(|bills| {
            bills.insert(bill.id, bill);
        });
    }

    pub fn get(&self, id: &BillId) -> Option<BillRecord> {
        self.bills.with(|bills| bills.get(id).cloned())
    }

    pub fn remove(&self, id: &BillId) {
        self.bills.update(|bills| {
            bills.remove(id);
        });
    }
}

impl Default for BillingStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigate to the bill view, handing the record over in memory.
pub fn open_bill(tabs_store: AppGlobalContext, store: BillingStore, bill: BillRecord) {
    let key = bill_tab_key(&bill.id);
    let title = format!("Bill #{}", bill.order_id);
    store.insert(bill);
    tabs_store.open_tab(&key, &title);
}

pub fn use_billing_store() -> BillingStore {
    use_context::<BillingStore>().expect("BillingStore not provided")
}
