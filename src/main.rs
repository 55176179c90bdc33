//! Command-line runner for the shop load generator.
//!
//! # Usage Examples
//!
//! ```bash
//! # Publish 100 orders to the local cluster
//! shop-loadgen --topic orders --entity order --count 100
//!
//! # Publish payments against a secured cluster described in YAML
//! shop-loadgen --config kafka.yaml --topic payments --entity payment
//!
//! # Deterministic run with topic creation and pacing
//! shop-loadgen --topic orders --seed 42 --create-topic --interval-ms 250
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use shop_loadgen::config::KafkaConfig;
use shop_loadgen::encode::Scalar;
use shop_loadgen::entity::{Customer, DeliveryAddress, Event, Order, Payment};
use shop_loadgen::publish::sink::KafkaSink;
use shop_loadgen::publish::{Delivery, Publisher};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Parser)]
#[command(name = "shop-loadgen")]
#[command(about = "Publishes synthetic shop records to Kafka topics")]
struct Cli {
    /// Path to a YAML connection config (overrides --brokers)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Kafka brokers (comma-separated, e.g. "localhost:9092")
    #[arg(long, env = "KAFKA_BROKERS", default_value = "localhost:9092")]
    brokers: String,

    /// Topic to publish to
    #[arg(long, default_value = "orders")]
    topic: String,

    /// Entity type to publish
    #[arg(long, value_enum, default_value = "order")]
    entity: EntityKind,

    /// Number of messages to publish
    #[arg(long, default_value = "100")]
    count: u64,

    /// Delay between publishes in milliseconds
    #[arg(long, default_value = "0")]
    interval_ms: u64,

    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Create the topic before publishing if it doesn't exist
    #[arg(long)]
    create_topic: bool,

    /// Partition count used with --create-topic
    #[arg(long, default_value = "3")]
    partitions: i32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EntityKind {
    Order,
    Customer,
    Address,
    Payment,
    Event,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KafkaConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            let config = KafkaConfig {
                brokers: cli.brokers.split(',').map(str::to_string).collect(),
                ..KafkaConfig::default()
            };
            config.validate()?;
            config
        }
    };

    let sink = KafkaSink::connect(&config).context("failed to create Kafka producer")?;
    if cli.create_topic {
        sink.create_topic_if_not_exists(&cli.topic, cli.partitions)
            .await
            .context("failed to create topic")?;
    }

    let mut publisher = match cli.seed {
        Some(seed) => Publisher::with_seed(sink, seed),
        None => Publisher::new(sink),
    };

    info!(
        "publishing {} {:?} messages to topic '{}'",
        cli.count, cli.entity, cli.topic
    );

    let started = Instant::now();
    let mut published = 0u64;
    for _ in 0..cli.count {
        let delivery = publish_one(&mut publisher, cli.entity, &cli.topic).await?;
        published += 1;
        info!(
            "produced to '{}' partition {} offset {}",
            delivery.topic, delivery.partition, delivery.offset
        );
        if cli.interval_ms > 0 {
            tokio::time::sleep(Duration::from_millis(cli.interval_ms)).await;
        }
    }

    let elapsed = started.elapsed();
    info!(
        "published {} messages in {:.2?} ({:.2} msg/sec)",
        published,
        elapsed,
        published as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    Ok(())
}

async fn publish_one(
    publisher: &mut Publisher<KafkaSink>,
    entity: EntityKind,
    topic: &str,
) -> anyhow::Result<Delivery> {
    let delivery = match entity {
        EntityKind::Order => {
            publisher
                .publish_with_headers(
                    topic,
                    |order: &Order| Scalar::from(order.id.as_str()),
                    demo_headers,
                )
                .await?
        }
        EntityKind::Customer => {
            publisher
                .publish(topic, |customer: &Customer| {
                    Scalar::from(customer.id.as_str())
                })
                .await?
        }
        EntityKind::Address => {
            publisher
                .publish(topic, |address: &DeliveryAddress| {
                    Scalar::from(address.zip_code.as_str())
                })
                .await?
        }
        EntityKind::Payment => {
            publisher
                .publish(topic, |payment: &Payment| Scalar::from(payment.id.as_str()))
                .await?
        }
        EntityKind::Event => {
            publisher
                .publish(topic, |event: &Event| Scalar::from(event.order.id.as_str()))
                .await?
        }
    };
    Ok(delivery)
}

fn demo_headers(_: &Order) -> Vec<(String, Scalar)> {
    vec![
        ("producer_service".to_string(), Scalar::from("owl-shop-v1")),
        ("encoding".to_string(), Scalar::from("json")),
        ("documentation".to_string(), Scalar::from("none")),
    ]
}
