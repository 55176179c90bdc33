//! Delivery address records.

use serde::{Deserialize, Serialize};

/// Delivery address attached to an order.
///
/// `first_name` and `last_name` are drawn consistently with the sampled
/// `gender`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub gender: Gender,
    pub first_name: String,
    pub last_name: String,
    /// Rarely populated (~2% of addresses carry a company line).
    pub company: Option<String>,
    pub street: String,
    pub building_number: String,
    pub zip_code: String,
    pub city: String,
    /// Free-text delivery notes, populated for ~60% of addresses.
    pub address_notes: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}
