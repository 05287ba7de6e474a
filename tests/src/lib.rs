//! # Verification Cache Test Suite
//!
//! Cross-crate tests and benchmarks.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Signed checks and counting proof backends
//! ├── benchmarks/       # Criterion benchmarks per crate
//! │   ├── cuckoo_cache.rs
//! │   └── verification_cache.rs
//! │
//! └── integration/      # Checker scenarios and concurrent access
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p node-tests
//! cargo test -p node-tests integration::
//!
//! # Benchmarks
//! cargo bench -p node-tests
//! ```

pub mod fixtures;
pub mod integration;
