//! # Integration Tests
//!
//! - `scenarios`: store and no-store flows, malformed input, overfill
//! - `concurrency`: shared caches under parallel validation
//! - `runtime`: caches created and shared through the node runtime

pub mod concurrency;
pub mod scenarios;
