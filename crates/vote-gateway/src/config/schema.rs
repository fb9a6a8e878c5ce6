use std::net::SocketAddr;

use serde::Deserialize;
use vote_core::error::{Result, VoteError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoteConfig {
    pub version: u32,

    #[serde(default)]
    pub options: OptionsSection,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub queue: QueueSection,
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            version: 1,
            options: OptionsSection::default(),
            gateway: GatewaySection::default(),
            queue: QueueSection::default(),
        }
    }
}

impl VoteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VoteError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.options.validate()?;
        self.gateway.validate()?;
        self.queue.validate()?;

        Ok(())
    }
}

/// The two labels offered on the ballot.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsSection {
    #[serde(default = "default_option_a")]
    pub a: String,

    #[serde(default = "default_option_b")]
    pub b: String,
}

impl Default for OptionsSection {
    fn default() -> Self {
        Self {
            a: default_option_a(),
            b: default_option_b(),
        }
    }
}

impl OptionsSection {
    pub fn validate(&self) -> Result<()> {
        if self.a.trim().is_empty() || self.b.trim().is_empty() {
            return Err(VoteError::Config("options.a and options.b must not be empty".into()));
        }
        if self.a == self.b {
            return Err(VoteError::Config("options.a and options.b must differ".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_listen")]
    pub metrics_listen: String,

    #[serde(default = "default_media_dir")]
    pub media_dir: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_listen: default_metrics_listen(),
            media_dir: default_media_dir(),
            static_dir: default_static_dir(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        let metrics = self.metrics_addr()?;
        if metrics == self.listen_addr()? {
            return Err(VoteError::Config(
                "gateway.metrics_listen must differ from gateway.listen".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        parse_addr("gateway.listen", &self.listen)
    }

    pub fn metrics_addr(&self) -> Result<SocketAddr> {
        parse_addr("gateway.metrics_listen", &self.metrics_listen)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueueSection {
    #[serde(default = "default_queue_url")]
    pub url: String,

    #[serde(default = "default_queue_key")]
    pub key: String,

    #[serde(default = "default_socket_timeout_ms")]
    pub socket_timeout_ms: u64,
}

impl Default for QueueSection {
    fn default() -> Self {
        Self {
            url: default_queue_url(),
            key: default_queue_key(),
            socket_timeout_ms: default_socket_timeout_ms(),
        }
    }
}

impl QueueSection {
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(VoteError::Config("queue.key must not be empty".into()));
        }
        if !(100..=60000).contains(&self.socket_timeout_ms) {
            return Err(VoteError::Config(
                "queue.socket_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn parse_addr(field: &str, v: &str) -> Result<SocketAddr> {
    v.parse()
        .map_err(|e| VoteError::Config(format!("{field} must be a valid SocketAddr: {e}")))
}

fn default_option_a() -> String {
    "Cats".into()
}
fn default_option_b() -> String {
    "Dogs".into()
}
fn default_listen() -> String {
    "0.0.0.0:80".into()
}
fn default_metrics_listen() -> String {
    "0.0.0.0:9091".into()
}
fn default_media_dir() -> String {
    "/usr/local/app/media".into()
}
fn default_static_dir() -> String {
    "static".into()
}
fn default_queue_url() -> String {
    "redis://redis:6379/0".into()
}
fn default_queue_key() -> String {
    "votes".into()
}
fn default_socket_timeout_ms() -> u64 {
    5000
}
