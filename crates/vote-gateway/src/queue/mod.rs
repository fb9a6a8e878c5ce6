//! Vote queue seam.
//!
//! Handlers only see `Arc<dyn VoteQueue>`; production wires [`RedisQueue`],
//! tests and local runs use [`MemoryQueue`].

pub mod memory;
pub mod redis;

use async_trait::async_trait;
use vote_core::{Result, VoteRecord};

pub use memory::MemoryQueue;
pub use self::redis::RedisQueue;

/// Append-only sink for cast votes.
///
/// `push` appends exactly once and never retries. Failures to reach the
/// backing store surface as `VoteError::QueueUnavailable`.
#[async_trait]
pub trait VoteQueue: Send + Sync + 'static {
    async fn push(&self, record: &VoteRecord) -> Result<()>;
}
