//! Shop customer records.

use serde::{Deserialize, Serialize};

/// A shop customer.
///
/// `email` is textually derived from `first_name` and `last_name` at
/// fabrication time, never sampled independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Populated for ~97% of customers.
    pub company_name: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    Personal,
    Business,
    NonProfit,
}

impl CustomerType {
    pub const ALL: [CustomerType; 3] = [
        CustomerType::Personal,
        CustomerType::Business,
        CustomerType::NonProfit,
    ];
}
