//! # Adapters Layer
//!
//! Cached checkers, one per proof kind. Each one parses its inputs through a
//! backend, derives an entry, and only calls the backend's verification on a
//! cache miss.

pub mod range_proof;
pub mod signature;
pub mod surjection_proof;

pub use range_proof::CachingRangeProofChecker;
pub use signature::CachingSignatureChecker;
pub use surjection_proof::CachingSurjectionProofChecker;

use tracing::trace;

use crate::cache::VerificationCache;
use crate::domain::entry::Entry;

/// Cache discipline shared by every checker.
///
/// A hit returns `true` without running `verify`. With `store` unset the
/// lookup consumes the entry, since a one-off check is unlikely to repeat.
/// No lock is held while `verify` runs.
pub(crate) fn check_cached(
    cache: &VerificationCache,
    entry: Entry,
    store: bool,
    verify: impl FnOnce() -> bool,
) -> bool {
    if cache.get(&entry, !store) {
        return true;
    }

    let valid = verify();
    trace!(kind = %cache.kind(), valid, store, "cache miss verified");
    if valid && store {
        cache.put(entry);
    }
    valid
}
