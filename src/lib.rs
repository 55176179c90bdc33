//! Synthetic e-commerce load generator for Kafka.
//!
//! This crate fabricates plausible, internally-consistent shop records
//! (orders, customers, line items, payments, delivery addresses, order
//! lifecycle events) and publishes them to Kafka topics with metadata
//! headers and pluggable key/value encodings.
//!
//! # Architecture
//!
//! ```text
//! Runner (CLI)
//!      │
//!      ▼
//! ┌──────────────┐     ┌────────────────────┐
//! │  Publisher   │────▶│ FabricatorRegistry │  rules keyed by TypeId
//! │              │     └────────────────────┘
//! │  key/headers │     ┌────────────────────┐
//! │  + value     │────▶│ TextEncoder /      │  keys+headers / values
//! │              │     │ JsonEncoder        │
//! └──────┬───────┘     └────────────────────┘
//!        │
//!        ▼
//!   BrokerSink (rdkafka FutureProducer)
//!        │
//!        ▼
//!   Delivery { topic, partition, offset }
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use shop_loadgen::config::KafkaConfig;
//! use shop_loadgen::encode::Scalar;
//! use shop_loadgen::entity::Order;
//! use shop_loadgen::publish::sink::KafkaSink;
//! use shop_loadgen::publish::Publisher;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = KafkaConfig::default();
//!     let sink = KafkaSink::connect(&config)?;
//!     let mut publisher = Publisher::new(sink);
//!
//!     let delivery = publisher
//!         .publish_with_headers(
//!             "orders",
//!             |order: &Order| Scalar::from(order.id.as_str()),
//!             |_: &Order| vec![("producer_service".to_string(), Scalar::from("owl-shop-v1"))],
//!         )
//!         .await?;
//!
//!     println!(
//!         "produced to '{}' partition {} offset {}",
//!         delivery.topic, delivery.partition, delivery.offset
//!     );
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod encode;
pub mod entity;
pub mod fabricate;
pub mod publish;

pub use config::{ConfigError, KafkaConfig};
pub use encode::{EncodeError, JsonEncoder, Scalar, TextEncoder};
pub use fabricate::{FabricationError, FabricatorRegistry};
pub use publish::{Delivery, PublishError, Publisher};
