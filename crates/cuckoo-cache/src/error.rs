//! Error types for the cuckoo cache

use thiserror::Error;

/// Errors that can occur while sizing a cache.
///
/// Lookups and inserts never fail. Only `setup` can, and a failure there is
/// a startup condition the node cannot continue past.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache must hold at least one element")]
    ZeroCapacity,

    #[error("Cache budget of {budget_bytes} bytes cannot hold a single {slot_bytes}-byte slot")]
    BudgetTooSmall {
        budget_bytes: usize,
        slot_bytes: usize,
    },
}
