//! # Node Container
//!
//! Configuration and the shared state handed to the validation subsystem.
//!
//! - The verification caches are created once, before validation starts
//! - Every validation worker reaches them through `ValidationContext`
//! - They are dropped only after all workers have stopped

pub mod config;
pub mod context;

pub use config::{cache_size_var, ConfigError, NodeConfig};
pub use context::ValidationContext;
