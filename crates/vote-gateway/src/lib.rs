//! Vote gateway library entry.
//!
//! This crate wires config, the vote queue, the metrics registry, and the HTTP
//! transport into the vote front-end. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod queue;
pub mod router;
pub mod transport;
