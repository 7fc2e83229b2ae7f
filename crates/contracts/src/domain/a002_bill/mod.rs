pub mod aggregate;

pub use aggregate::{BillId, BillItem, BillRecord};
