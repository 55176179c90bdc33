//! Kafka connection configuration.
//!
//! The runner loads this from YAML; the publishing core only consumes the
//! resulting rdkafka [`ClientConfig`] and never reads configuration files
//! itself.

use rdkafka::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const SASL_MECHANISM_PLAIN: &str = "PLAIN";
pub const SASL_MECHANISM_SCRAM_SHA_256: &str = "SCRAM-SHA-256";
pub const SASL_MECHANISM_SCRAM_SHA_512: &str = "SCRAM-SHA-512";

/// Errors from loading or validating the connection config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("you must configure at least one broker to connect to")]
    NoBrokers,

    #[error("given sasl mechanism '{0}' is invalid")]
    InvalidSaslMechanism(String),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Connection settings for the target Kafka cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaConfig {
    pub brokers: Vec<String>,
    pub client_id: String,
    pub sasl: SaslConfig,
    pub tls: TlsConfig,
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: vec!["localhost:9092".to_string()],
            client_id: "shop-loadgen".to_string(),
            sasl: SaslConfig::default(),
            tls: TlsConfig::default(),
        }
    }
}

impl KafkaConfig {
    /// Load and validate a config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brokers.is_empty() {
            return Err(ConfigError::NoBrokers);
        }
        self.sasl.validate()
    }

    /// Map onto librdkafka client properties.
    pub fn client_config(&self) -> ClientConfig {
        let mut client_config = ClientConfig::new();
        client_config
            .set("bootstrap.servers", self.brokers.join(","))
            .set("client.id", &self.client_id)
            .set("message.timeout.ms", "30000");

        match (self.sasl.enabled, self.tls.enabled) {
            (true, true) => {
                client_config.set("security.protocol", "SASL_SSL");
            }
            (true, false) => {
                client_config.set("security.protocol", "SASL_PLAINTEXT");
            }
            (false, true) => {
                client_config.set("security.protocol", "SSL");
            }
            (false, false) => {}
        }

        if self.sasl.enabled {
            client_config
                .set("sasl.mechanism", &self.sasl.mechanism)
                .set("sasl.username", &self.sasl.username)
                .set("sasl.password", &self.sasl.password);
        }

        if self.tls.enabled {
            if let Some(ca) = &self.tls.ca_filepath {
                client_config.set("ssl.ca.location", ca);
            }
            if let Some(cert) = &self.tls.cert_filepath {
                client_config.set("ssl.certificate.location", cert);
            }
            if let Some(key) = &self.tls.key_filepath {
                client_config.set("ssl.key.location", key);
            }
            if self.tls.insecure_skip_tls_verify {
                client_config.set("enable.ssl.certificate.verification", "false");
            }
        }

        client_config
    }
}

/// SASL settings for the Kafka client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SaslConfig {
    pub enabled: bool,
    pub mechanism: String,
    pub username: String,
    pub password: String,
}

impl Default for SaslConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mechanism: SASL_MECHANISM_PLAIN.to_string(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl SaslConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }
        match self.mechanism.as_str() {
            SASL_MECHANISM_PLAIN | SASL_MECHANISM_SCRAM_SHA_256 | SASL_MECHANISM_SCRAM_SHA_512 => {
                Ok(())
            }
            other => Err(ConfigError::InvalidSaslMechanism(other.to_string())),
        }
    }
}

/// TLS settings for the Kafka client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub enabled: bool,
    pub ca_filepath: Option<String>,
    pub cert_filepath: Option<String>,
    pub key_filepath: Option<String>,
    pub insecure_skip_tls_verify: bool,
}
