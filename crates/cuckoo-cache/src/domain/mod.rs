//! Domain Layer - Pure data structure logic
//!
//! This layer contains:
//! - The cuckoo cache table and its eviction heuristic
//! - Key windowing (bucket index derivation)
//! - Packed atomic per-slot flags
//!
//! RULES:
//! - No I/O operations
//! - No locking (callers synchronize)

pub mod cuckoo;
pub mod flags;
pub mod key;

pub use cuckoo::{CuckooCache, MAX_DISPLACEMENT_HOPS};
pub use flags::AtomicBitFlags;
pub use key::{CuckooKey, CANDIDATE_COUNT};
