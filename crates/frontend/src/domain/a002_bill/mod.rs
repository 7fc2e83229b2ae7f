pub mod store;
pub mod ui;

use contracts::domain::a002_bill::BillId;
use contracts::domain::common::AggregateId;

pub const BILL_TAB_PREFIX: &str = "a002_bill_detail_";

pub fn bill_tab_key(id: &BillId) -> String {
    format!("{}{}", BILL_TAB_PREFIX, id.as_string())
}

pub fn parse_bill_tab_key(key: &str) -> Option<BillId> {
    let id = key.strip_prefix(BILL_TAB_PREFIX)?;
    BillId::from_string(id).ok()
}
