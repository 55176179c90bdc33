//! Domain record types published by the load generator.
//!
//! All entities are immutable-after-construction value records: they are
//! fabricated fully formed in one pass, serialized, and dropped once the
//! publish call returns. Field order and enum variant names are part of the
//! wire contract (see [`crate::encode::JsonEncoder`]).

pub mod address;
pub mod customer;
pub mod event;
pub mod line_item;
pub mod order;
pub mod payment;

pub use address::{DeliveryAddress, Gender};
pub use customer::{Customer, CustomerType};
pub use event::{Event, EventType};
pub use line_item::{LineItem, QuantityUnit};
pub use order::Order;
pub use payment::{Payment, PaymentMethod};
