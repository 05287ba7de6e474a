//! Counters for cuckoo cache operations
//!
//! Provides instrumentation points for monitoring hit rates, eviction
//! pressure and generation turnover.
//!
//! ## Usage
//!
//! ```ignore
//! let snapshot = cache.stats();
//! tracing::info!(
//!     hit_rate = snapshot.hit_rate(),
//!     evictions = snapshot.forced_evictions,
//!     "signature cache stats"
//! );
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a single cache instance.
///
/// Atomic so that lookups holding only a shared lock can still record.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Keys placed into a slot (new or displaced into place)
    pub inserts: AtomicU64,
    /// Inserts of a key that was already live
    pub refreshes: AtomicU64,
    /// Inserts that needed a displacement chain
    pub displacements: AtomicU64,
    /// Inserts that overwrote a live key
    pub forced_evictions: AtomicU64,
    /// Completed generation flips
    pub generation_advances: AtomicU64,
    /// Total `contains` calls on a sized cache
    pub lookups: AtomicU64,
    /// `contains` calls that found a live key
    pub hits: AtomicU64,
    /// Keys erased by a consuming lookup
    pub erasures: AtomicU64,
}

impl CacheStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_displacement(&self) {
        self.displacements.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_forced_eviction(&self) {
        self.forced_evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_generation_advance(&self) {
        self.generation_advances.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup and whether it hit
    pub fn record_lookup(&self, hit: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_erasure(&self) {
        self.erasures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current counters as a plain snapshot
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            refreshes: self.refreshes.load(Ordering::Relaxed),
            displacements: self.displacements.load(Ordering::Relaxed),
            forced_evictions: self.forced_evictions.load(Ordering::Relaxed),
            generation_advances: self.generation_advances.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            erasures: self.erasures.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.refreshes.store(0, Ordering::Relaxed);
        self.displacements.store(0, Ordering::Relaxed);
        self.forced_evictions.store(0, Ordering::Relaxed);
        self.generation_advances.store(0, Ordering::Relaxed);
        self.lookups.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.erasures.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time counter snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStatsSnapshot {
    pub inserts: u64,
    pub refreshes: u64,
    pub displacements: u64,
    pub forced_evictions: u64,
    pub generation_advances: u64,
    pub lookups: u64,
    pub hits: u64,
    pub erasures: u64,
}

impl CacheStatsSnapshot {
    /// Fraction of lookups that hit
    pub fn hit_rate(&self) -> f64 {
        if self.lookups > 0 {
            self.hits as f64 / self.lookups as f64
        } else {
            0.0
        }
    }

    /// Fraction of inserts that had to overwrite a live key
    pub fn eviction_rate(&self) -> f64 {
        if self.inserts > 0 {
            self.forced_evictions as f64 / self.inserts as f64
        } else {
            0.0
        }
    }
}
