pub mod aggregate;
pub mod board;
pub mod dto;
pub mod error;
pub mod grouping;
pub mod tab;
pub mod wire;

pub use aggregate::{Consumer, Order, OrderId, OrderItem};
pub use board::{OrderBoard, StatusTicket, SyncState};
pub use error::OrderLineError;
pub use grouping::{group_order_lines, parse_order_lines, ParsedLines, RejectedLine};
pub use tab::OrderTab;
pub use wire::{LineProduct, OrderLine};
