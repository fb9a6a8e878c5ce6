//! Shared application state for the vote gateway.
//!
//! Every collaborator the handler touches is injected here: the queue handle,
//! the metrics registry, and the resolved config. Nothing is reached through
//! globals.

use std::sync::Arc;

use vote_core::error::Result;

use crate::config::VoteConfig;
use crate::obs::metrics::VoteMetrics;
use crate::queue::{RedisQueue, VoteQueue};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    queue: Arc<dyn VoteQueue>,
    metrics: Arc<VoteMetrics>,
}

struct AppStateInner {
    cfg: VoteConfig,
    hostname: String,
}

impl AppState {
    /// Build production state backed by Redis.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: VoteConfig, hostname: String) -> Result<Self> {
        let queue = RedisQueue::new(&cfg.queue)?;
        tracing::info!(url = %cfg.queue.url, key = %cfg.queue.key, "queue client configured");
        Ok(Self::with_queue(cfg, hostname, Arc::new(queue)))
    }

    /// Build state around an arbitrary queue backend.
    pub fn with_queue(cfg: VoteConfig, hostname: String, queue: Arc<dyn VoteQueue>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, hostname }),
            queue,
            metrics: Arc::new(VoteMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &VoteConfig {
        &self.inner.cfg
    }

    pub fn hostname(&self) -> &str {
        &self.inner.hostname
    }

    pub fn queue(&self) -> Arc<dyn VoteQueue> {
        Arc::clone(&self.queue)
    }

    pub fn metrics(&self) -> Arc<VoteMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }
}
