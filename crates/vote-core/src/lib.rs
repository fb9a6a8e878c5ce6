//! vote core: transport-agnostic vote types and the shared error surface.
//!
//! This crate defines the queue wire record, the voter identity token, and the
//! error type shared by the gateway. It carries no HTTP or runtime
//! dependencies so the downstream worker can decode the same records.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `VoteError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod record;

/// Shared result type.
pub use error::{Result, VoteError};
pub use record::{VoteRecord, VoterId};
