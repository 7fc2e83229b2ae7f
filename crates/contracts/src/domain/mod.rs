pub mod a001_shop_order;
pub mod a002_bill;
pub mod common;
