//! Top-level facade crate for the vote front-end.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use vote_core::*;
}

pub mod gateway {
    pub use vote_gateway::*;
}
