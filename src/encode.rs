//! Key and value encoders.
//!
//! Two encoding capabilities exist: [`TextEncoder`] for message keys and
//! header values (textual scalars only), and [`JsonEncoder`] for message
//! values (any serializable entity). Callers select the encoder by declared
//! need; neither performs runtime type inspection and neither mutates its
//! input.

use serde::Serialize;
use thiserror::Error;

/// Errors from the key/value encoders.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The text encoder was handed a non-textual scalar. No bytes are
    /// produced.
    #[error("the text encoder can only encode text scalars, got a {0} scalar")]
    TypeMismatch(&'static str),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A tagged scalar used for message keys and header values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Bytes(Vec<u8>),
}

impl Scalar {
    fn tag(&self) -> &'static str {
        match self {
            Scalar::Text(_) => "text",
            Scalar::Int(_) => "int",
            Scalar::Bytes(_) => "bytes",
        }
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

/// Encodes textual scalars as their UTF-8 byte sequence.
///
/// Handing it any other scalar tag is an encoder contract violation and
/// fails with [`EncodeError::TypeMismatch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl TextEncoder {
    pub fn encode(&self, scalar: &Scalar) -> Result<Vec<u8>, EncodeError> {
        match scalar {
            Scalar::Text(text) => Ok(text.as_bytes().to_vec()),
            other => Err(EncodeError::TypeMismatch(other.tag())),
        }
    }
}

/// Encodes any serializable entity as pretty-printed JSON.
///
/// The output is a wire contract for downstream consumers: UTF-8 text,
/// field names in lower camel case following declaration order, enum values
/// rendered as their symbolic names, 2-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl JsonEncoder {
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec_pretty(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{LineItem, Order, Payment, PaymentMethod, QuantityUnit};
    use crate::fabricate::rules;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_text_encoder_utf8() {
        let encoded = TextEncoder.encode(&Scalar::from("owl-shop-v1")).unwrap();
        assert_eq!(encoded, b"owl-shop-v1");
    }

    #[test]
    fn test_text_encoder_rejects_non_text() {
        let result = TextEncoder.encode(&Scalar::Int(42));
        assert!(matches!(result, Err(EncodeError::TypeMismatch("int"))));

        let result = TextEncoder.encode(&Scalar::Bytes(vec![1, 2, 3]));
        assert!(matches!(result, Err(EncodeError::TypeMismatch("bytes"))));
    }

    #[test]
    fn test_json_encoder_camel_case_and_symbolic_enums() {
        let item = LineItem {
            article_id: "a-1".to_string(),
            name: "Small Granite Chair".to_string(),
            quantity: 3,
            quantity_unit: QuantityUnit::Kilogram,
            base_price: 100,
            total_price: 300,
        };
        let text = String::from_utf8(JsonEncoder.encode(&item).unwrap()).unwrap();
        assert!(text.contains("\"articleId\""));
        assert!(text.contains("\"basePrice\""));
        assert!(text.contains("\"totalPrice\""));
        assert!(text.contains("\"KILOGRAM\""));
        // Pretty-printed with indentation
        assert!(text.contains("\n  "));
    }

    #[test]
    fn test_json_encoder_payment_enum_names() {
        let payment = Payment {
            id: "p-1".to_string(),
            method: PaymentMethod::DirectDebit,
            transaction_id: "t-1".to_string(),
        };
        let text = String::from_utf8(JsonEncoder.encode(&payment).unwrap()).unwrap();
        assert!(text.contains("\"DirectDebit\""));
        assert!(text.contains("\"transactionID\""));
        // Symbolic name, not an ordinal
        assert!(!text.contains("\"method\": 3"));
    }

    #[test]
    fn test_json_round_trip_fabricated_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let order = rules::order(&mut rng);

        let encoded = JsonEncoder.encode(&order).unwrap();
        let decoded: Order = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(order, decoded);
    }

    #[test]
    fn test_json_encoder_nested_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        let order = rules::order(&mut rng);
        let text = String::from_utf8(JsonEncoder.encode(&order).unwrap()).unwrap();
        // Two-plus levels of nesting reach the line items and the customer
        assert!(text.contains("\"customer\""));
        assert!(text.contains("\"lineItems\""));
        assert!(text.contains("\"deliveryAddress\""));
        assert!(text.contains("\"orderValue\""));
    }
}
