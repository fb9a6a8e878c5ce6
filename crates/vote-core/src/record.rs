//! Queue wire types.
//!
//! A `VoteRecord` is serialized to a single JSON object and appended to the
//! vote list: `{"voter_id":"<hex>","vote":"<label>"}`. Field order is part of
//! the wire contract consumed by the downstream worker.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Opaque per-client voter token.
///
/// Fresh tokens are 64 random bits rendered as lowercase hex with no prefix
/// and no zero padding. Tokens read back from a client are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    /// Draw a fresh identity.
    pub fn generate() -> Self {
        Self::from_bits(rand::random::<u64>())
    }

    /// Render 64 bits as an identity token.
    pub fn from_bits(bits: u64) -> Self {
        Self(format!("{bits:x}"))
    }

    /// Wrap a client-supplied value. Empty values are rejected so callers can
    /// fall back to [`VoterId::generate`].
    pub fn from_client(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cast vote, as appended to the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub voter_id: VoterId,
    pub vote: String,
}

impl VoteRecord {
    pub fn new(voter_id: VoterId, vote: impl Into<String>) -> Self {
        Self {
            voter_id,
            vote: vote.into(),
        }
    }

    /// Encode to the queue wire format.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from the queue wire format.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
