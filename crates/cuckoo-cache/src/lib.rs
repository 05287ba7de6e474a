//! # Cuckoo Cache
//!
//! Memory-bounded probabilistic set used to remember which expensive
//! verifications (signatures, range proofs, surjection proofs) already
//! succeeded.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure data structure, no I/O, no locking
//!   - `CuckooCache`: the fixed-capacity table
//!   - `CuckooKey`: how a key exposes its 8 bucket windows
//!   - `AtomicBitFlags`: packed per-slot erase flags
//! - **Metrics** (`metrics.rs`): atomic counters and snapshots
//!
//! ## Invariants
//!
//! - **No false positives**: `contains()` only returns true for a key that was
//!   inserted and has not been erased since. Keys are compared exactly.
//! - **Bounded memory**: the table is allocated once by `setup_bytes()` and
//!   never grows.
//! - False negatives (evictions) are allowed. They only force recomputation.
//!
//! ## Usage Example
//!
//! ```
//! use cuckoo_cache::CuckooCache;
//!
//! let mut cache: CuckooCache<[u8; 32]> = CuckooCache::new();
//! let capacity = cache.setup_bytes(1 << 16).expect("budget fits at least one slot");
//! assert_eq!(capacity, 2048);
//!
//! let key = [7u8; 32];
//! cache.insert(key);
//! assert!(cache.contains(&key, false));
//! assert!(cache.contains(&key, true)); // hit, then erased
//! assert!(!cache.contains(&key, false));
//! ```
//!
//! ## Concurrency
//!
//! The cache is not synchronized. Callers wrap it in a reader/writer lock:
//! shared access for `contains(_, false)`, exclusive access for everything
//! that mutates (`insert`, `contains(_, true)`).

pub mod domain;
pub mod error;
pub mod metrics;

// Re-exports for convenience
pub use domain::{AtomicBitFlags, CuckooCache, CuckooKey, CANDIDATE_COUNT};
pub use error::CacheError;
pub use metrics::{CacheStats, CacheStatsSnapshot};
