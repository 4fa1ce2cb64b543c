use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Relay configuration. Every field has a default, so running without a
/// config file gives the stock ports and stream rate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub stream: StreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_web_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    #[serde(default = "default_ingest_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// Period of the per-connection SSE push timer, in milliseconds.
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
}

fn default_web_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_ingest_bind() -> String {
    "0.0.0.0:8585".to_string()
}

fn default_period_ms() -> u64 {
    10
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            bind: default_web_bind(),
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig {
            bind: default_ingest_bind(),
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            period_ms: default_period_ms(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
