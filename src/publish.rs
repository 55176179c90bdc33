//! Generic fabricate-and-publish pipeline.
//!
//! One publish call fabricates exactly one entity, derives the message key
//! and headers from that same instance, encodes everything, and hands the
//! result to the broker sink. The broker acknowledgment is the only
//! suspension point; no retry, batching, or cross-call ordering is provided.

pub mod sink;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::encode::{EncodeError, JsonEncoder, Scalar, TextEncoder};
use crate::fabricate::{FabricationError, FabricatorRegistry};
use sink::BrokerSink;

/// Broker-confirmed placement of a published message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
}

/// Errors surfaced by [`Publisher::publish`].
///
/// None of these are caught or retried inside the pipeline; the caller
/// decides whether to continue or abort.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Fabrication(#[from] FabricationError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    #[error("message delivery failed: {0}")]
    Delivery(String),
}

/// Publishes fabricated entities to a broker sink.
///
/// Generic over any entity type with a rule in the registry; the lookup
/// happens at publish time and an unregistered type fails before any
/// encoding or network activity.
pub struct Publisher<S> {
    sink: S,
    registry: FabricatorRegistry,
    rng: StdRng,
    key_encoder: TextEncoder,
    value_encoder: JsonEncoder,
}

impl<S: BrokerSink> Publisher<S> {
    /// Publisher with the default entity rules and an entropy-seeded RNG.
    pub fn new(sink: S) -> Self {
        Self::with_registry(sink, FabricatorRegistry::with_defaults())
    }

    /// Publisher reproducing the same entity stream for the same seed.
    pub fn with_seed(sink: S, seed: u64) -> Self {
        let mut publisher = Self::new(sink);
        publisher.rng = StdRng::seed_from_u64(seed);
        publisher
    }

    /// Publisher with a caller-supplied rule registry.
    pub fn with_registry(sink: S, registry: FabricatorRegistry) -> Self {
        Self {
            sink,
            registry,
            rng: StdRng::from_entropy(),
            key_encoder: TextEncoder,
            value_encoder: JsonEncoder,
        }
    }

    /// The rule registry, for registering additional entity types.
    pub fn registry_mut(&mut self) -> &mut FabricatorRegistry {
        &mut self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Fabricate one `T`, key it with `key_fn`, and publish it to `topic`.
    pub async fn publish<T, K>(&mut self, topic: &str, key_fn: K) -> Result<Delivery, PublishError>
    where
        T: Serialize + 'static,
        K: Fn(&T) -> Scalar,
    {
        self.publish_with_headers(topic, key_fn, |_: &T| Vec::new())
            .await
    }

    /// As [`Publisher::publish`], with message headers derived from the same
    /// fabricated instance as the key and the value.
    pub async fn publish_with_headers<T, K, H>(
        &mut self,
        topic: &str,
        key_fn: K,
        header_fn: H,
    ) -> Result<Delivery, PublishError>
    where
        T: Serialize + 'static,
        K: Fn(&T) -> Scalar,
        H: Fn(&T) -> Vec<(String, Scalar)>,
    {
        let entity: T = self.registry.fabricate(&mut self.rng)?;

        let mut headers = Vec::new();
        for (name, value) in header_fn(&entity) {
            headers.push((name, self.key_encoder.encode(&value)?));
        }
        let key = self.key_encoder.encode(&key_fn(&entity))?;
        let value = self.value_encoder.encode(&entity)?;

        debug!(
            topic,
            key_bytes = key.len(),
            value_bytes = value.len(),
            header_count = headers.len(),
            "submitting message"
        );

        self.sink.submit(topic, key, value, headers).await
    }
}
