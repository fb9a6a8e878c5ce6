//! Redis list backend.
//!
//! Each push opens its own connection, bounded by the configured socket
//! timeout, and appends with `RPUSH <key> <json>`. Nothing is pooled or kept
//! between requests.

use std::time::Duration;

use async_trait::async_trait;
use ::redis::{AsyncCommands, Client};
use vote_core::error::{Result, VoteError};
use vote_core::VoteRecord;

use super::VoteQueue;
use crate::config::QueueSection;

pub struct RedisQueue {
    client: Client,
    key: String,
    timeout: Duration,
}

impl RedisQueue {
    /// Validate the URL up front; no connection is made here.
    pub fn new(cfg: &QueueSection) -> Result<Self> {
        let client = Client::open(cfg.url.as_str())
            .map_err(|e| VoteError::Config(format!("invalid queue.url: {e}")))?;
        Ok(Self {
            client,
            key: cfg.key.clone(),
            timeout: Duration::from_millis(cfg.socket_timeout_ms),
        })
    }
}

#[async_trait]
impl VoteQueue for RedisQueue {
    async fn push(&self, record: &VoteRecord) -> Result<()> {
        let data = record.to_json()?;

        let mut conn = tokio::time::timeout(
            self.timeout,
            self.client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| VoteError::QueueUnavailable("connect timed out".into()))?
        .map_err(|e| VoteError::QueueUnavailable(format!("connect failed: {e}")))?;
        tracing::debug!(key = %self.key, "connected to queue");

        let len = tokio::time::timeout(self.timeout, conn.rpush::<_, _, i64>(&self.key, data))
            .await
            .map_err(|_| VoteError::QueueUnavailable("rpush timed out".into()))?
            .map_err(|e| VoteError::QueueUnavailable(format!("rpush failed: {e}")))?;
        tracing::debug!(key = %self.key, len, "vote appended");

        Ok(())
    }
}
