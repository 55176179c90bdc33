//! Order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Customer, DeliveryAddress, LineItem, Payment};

/// A complete shop order with its embedded customer, line items, payment and
/// delivery address.
///
/// `order_value` is always recomputed as the sum of all line item total
/// prices after the line items are fixed. `delivered_at` and `completed_at`
/// are sampled independently of each other; the wire contract makes no
/// ordering promise between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub customer: Customer,
    pub order_value: i64,
    /// Non-empty, bounded to [3, 150] entries.
    pub line_items: Vec<LineItem>,
    pub payment: Payment,
    pub delivery_address: DeliveryAddress,
}
