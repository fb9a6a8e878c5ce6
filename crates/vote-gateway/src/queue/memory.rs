//! In-process FIFO used by tests and local runs without Redis.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use vote_core::error::{Result, VoteError};
use vote_core::VoteRecord;

use super::VoteQueue;

#[derive(Default)]
pub struct MemoryQueue {
    items: Mutex<Vec<String>>,
    unreachable: AtomicBool,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the backing store going away (or coming back).
    pub fn set_unreachable(&self, down: bool) {
        self.unreachable.store(down, Ordering::Relaxed);
    }

    /// Snapshot of the serialized entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.items
            .lock()
            .map(|items| items.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl VoteQueue for MemoryQueue {
    async fn push(&self, record: &VoteRecord) -> Result<()> {
        if self.unreachable.load(Ordering::Relaxed) {
            return Err(VoteError::QueueUnavailable("memory queue marked unreachable".into()));
        }
        let data = record.to_json()?;
        self.items
            .lock()
            .map_err(|_| VoteError::Internal("memory queue poisoned".into()))?
            .push(data);
        Ok(())
    }
}
