//! # Verification Cache
//!
//! One nonced cuckoo table per proof kind, shared across validation threads.
//!
//! Non-consuming lookups share the read side of the lock. Consuming lookups
//! and inserts take the write side.

use cuckoo_cache::{CacheError, CacheStatsSnapshot, CuckooCache};
use parking_lot::RwLock;
use tracing::trace;

use crate::domain::entities::{Hash, ProofKind};
use crate::domain::entry::{Entry, EntryHasher};

/// Thread-safe cache of successful verifications for one proof kind.
pub struct VerificationCache {
    kind: ProofKind,
    hasher: EntryHasher,
    table: RwLock<CuckooCache<Entry>>,
}

impl VerificationCache {
    /// Create an unsized cache with a fresh nonce.
    ///
    /// Holds nothing until [`setup_bytes`](Self::setup_bytes) is called.
    pub fn new(kind: ProofKind) -> Self {
        Self {
            kind,
            hasher: EntryHasher::new(),
            table: RwLock::new(CuckooCache::new()),
        }
    }

    /// Size the table to fit in `budget_bytes`; returns the element count.
    ///
    /// Drops every cached entry.
    pub fn setup_bytes(&self, budget_bytes: usize) -> Result<usize, CacheError> {
        self.table.write().setup_bytes(budget_bytes)
    }

    /// Derive the entry for one verification request under this cache's nonce.
    pub fn compute_entry(&self, message_digest: &Hash, proof: &[u8], key: &[u8]) -> Entry {
        self.hasher.compute_entry(message_digest, proof, key)
    }

    /// Look up `entry`; with `consume` a hit also erases it.
    pub fn get(&self, entry: &Entry, consume: bool) -> bool {
        let hit = if consume {
            self.table.write().contains(entry, true)
        } else {
            self.table.read().contains(entry, false)
        };
        trace!(kind = %self.kind, ?entry, hit, consume, "cache lookup");
        hit
    }

    /// Remember `entry` as verified.
    pub fn put(&self, entry: Entry) {
        self.table.write().insert(entry);
    }

    pub fn kind(&self) -> ProofKind {
        self.kind
    }

    /// Element capacity of the table.
    pub fn capacity(&self) -> usize {
        self.table.read().capacity()
    }

    /// Bytes held by the entry table alone.
    pub fn table_bytes(&self) -> usize {
        self.table.read().table_bytes()
    }

    /// Bytes held by the table plus its flag arrays.
    pub fn memory_usage(&self) -> usize {
        self.table.read().memory_usage()
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.table.read().stats()
    }
}

impl std::fmt::Debug for VerificationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationCache")
            .field("kind", &self.kind)
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
