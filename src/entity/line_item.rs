//! Order line item records.

use serde::{Deserialize, Serialize};

/// One position of an order.
///
/// `total_price` is always recomputed as `base_price * quantity` during
/// fabrication and is never set independently. Prices are integers in minor
/// currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub article_id: String,
    pub name: String,
    /// Bounded to [1, 1500].
    pub quantity: i64,
    pub quantity_unit: QuantityUnit,
    /// Bounded to [0, 10000].
    pub base_price: i64,
    pub total_price: i64,
}

/// Unit a line item quantity is measured in.
///
/// Serialized in upper case (`"PIECE"`, `"GRAM"`, ...) as downstream
/// consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuantityUnit {
    Piece,
    Gram,
    Kilogram,
    Metre,
    Litre,
}

impl QuantityUnit {
    pub const ALL: [QuantityUnit; 5] = [
        QuantityUnit::Piece,
        QuantityUnit::Gram,
        QuantityUnit::Kilogram,
        QuantityUnit::Metre,
        QuantityUnit::Litre,
    ];
}
