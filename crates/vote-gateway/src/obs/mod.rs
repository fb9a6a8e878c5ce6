//! Lightweight in-process metrics.
//!
//! Metrics are stored as atomics, owned by `AppState`, and rendered by the
//! `/metrics` handler on the separate metrics listener.

pub mod metrics;
