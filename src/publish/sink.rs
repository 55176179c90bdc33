//! Broker sink abstraction and the rdkafka-backed implementation.

use async_trait::async_trait;
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::message::{Header, OwnedHeaders};
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::ClientConfig;
use std::time::Duration;
use tracing::info;

use super::{Delivery, PublishError};
use crate::config::KafkaConfig;

/// Narrow interface the publisher uses to hand messages to a broker.
///
/// Connection management, partition assignment, and delivery acknowledgment
/// all live behind this seam.
#[async_trait]
pub trait BrokerSink: Send + Sync {
    /// Submit one message and await the broker's delivery acknowledgment.
    async fn submit(
        &self,
        topic: &str,
        key: Vec<u8>,
        value: Vec<u8>,
        headers: Vec<(String, Vec<u8>)>,
    ) -> Result<Delivery, PublishError>;
}

/// Kafka-backed sink around an rdkafka [`FutureProducer`].
pub struct KafkaSink {
    producer: FutureProducer,
    client_config: ClientConfig,
}

impl KafkaSink {
    /// Build a sink from a validated connection config.
    pub fn connect(config: &KafkaConfig) -> Result<Self, PublishError> {
        let client_config = config.client_config();
        let producer: FutureProducer = client_config.create()?;
        Ok(Self {
            producer,
            client_config,
        })
    }

    /// Create `topic` with the given partition count if it doesn't exist yet.
    pub async fn create_topic_if_not_exists(
        &self,
        topic: &str,
        partitions: i32,
    ) -> Result<(), PublishError> {
        let admin_client: AdminClient<DefaultClientContext> = self.client_config.create()?;

        let new_topic = NewTopic::new(topic, partitions, TopicReplication::Fixed(1));
        let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(10)));

        match admin_client.create_topics(&[new_topic], &opts).await {
            Ok(results) => {
                for result in results {
                    match result {
                        Ok(topic_name) => {
                            info!("Topic '{topic_name}' created successfully");
                        }
                        Err((topic_name, err)) => {
                            if err.to_string().contains("already exists") {
                                info!("Topic '{topic_name}' already exists");
                            } else {
                                return Err(PublishError::Delivery(format!(
                                    "failed to create topic {topic_name}: {err}"
                                )));
                            }
                        }
                    }
                }
            }
            Err(e) => return Err(PublishError::Kafka(e)),
        }

        Ok(())
    }
}

#[async_trait]
impl BrokerSink for KafkaSink {
    async fn submit(
        &self,
        topic: &str,
        key: Vec<u8>,
        value: Vec<u8>,
        headers: Vec<(String, Vec<u8>)>,
    ) -> Result<Delivery, PublishError> {
        let mut record = FutureRecord::to(topic).key(&key).payload(&value);
        if !headers.is_empty() {
            let mut owned = OwnedHeaders::new();
            for (name, header_value) in &headers {
                owned = owned.insert(Header {
                    key: name.as_str(),
                    value: Some(header_value),
                });
            }
            record = record.headers(owned);
        }

        match self.producer.send(record, Duration::from_secs(30)).await {
            Ok((partition, offset)) => Ok(Delivery {
                topic: topic.to_string(),
                partition,
                offset,
            }),
            Err((err, _)) => Err(PublishError::Kafka(err)),
        }
    }
}
