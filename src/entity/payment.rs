//! Payment records.

use serde::{Deserialize, Serialize};

/// Payment attached to an order. `id` and `transaction_id` are distinct
/// identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub method: PaymentMethod,
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    PayPal,
    CreditCard,
    Cash,
    DirectDebit,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::PayPal,
        PaymentMethod::CreditCard,
        PaymentMethod::Cash,
        PaymentMethod::DirectDebit,
    ];
}
