//! # Verification Caches Service
//!
//! Owns the three per-kind caches and hands out checkers bound to them.
//!
//! Created once at node startup and shared with the validation subsystem
//! through an `Arc`.

use std::sync::Arc;

use cuckoo_cache::{CacheError, CacheStatsSnapshot};
use serde::Serialize;
use tracing::info;

use crate::adapters::{CachingRangeProofChecker, CachingSignatureChecker, CachingSurjectionProofChecker};
use crate::cache::VerificationCache;
use crate::domain::config::CacheConfig;
use crate::domain::entities::ProofKind;
use crate::ports::outbound::{RangeProofBackend, SurjectionProofBackend};

/// The signature, range proof and surjection proof caches.
#[derive(Debug)]
pub struct VerificationCaches {
    signature: Arc<VerificationCache>,
    range_proof: Arc<VerificationCache>,
    surjection_proof: Arc<VerificationCache>,
}

/// Occupancy and counters of one cache.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CacheReport {
    pub kind: ProofKind,
    pub capacity: usize,
    pub memory_bytes: usize,
    pub lookups: u64,
    pub hits: u64,
    pub hit_rate: f64,
    pub inserts: u64,
    pub forced_evictions: u64,
    pub generation_advances: u64,
}

impl CacheReport {
    fn new(cache: &VerificationCache) -> Self {
        let stats: CacheStatsSnapshot = cache.stats();
        Self {
            kind: cache.kind(),
            capacity: cache.capacity(),
            memory_bytes: cache.memory_usage(),
            lookups: stats.lookups,
            hits: stats.hits,
            hit_rate: stats.hit_rate(),
            inserts: stats.inserts,
            forced_evictions: stats.forced_evictions,
            generation_advances: stats.generation_advances,
        }
    }
}

impl VerificationCaches {
    /// Create and size all three caches from `config`.
    ///
    /// Fails if any budget cannot hold a single entry.
    pub fn init(config: &CacheConfig) -> Result<Self, CacheError> {
        let caches = Self {
            signature: Arc::new(VerificationCache::new(ProofKind::Signature)),
            range_proof: Arc::new(VerificationCache::new(ProofKind::RangeProof)),
            surjection_proof: Arc::new(VerificationCache::new(ProofKind::SurjectionProof)),
        };

        for kind in ProofKind::ALL {
            let cache = caches.cache(kind);
            let requested = config.bytes_for(kind);
            let elements = cache.setup_bytes(requested)?;
            info!(
                "Using {} MiB out of {} MiB requested for {} cache, able to store {} elements",
                cache.table_bytes() >> 20,
                requested >> 20,
                kind,
                elements
            );
        }

        Ok(caches)
    }

    /// The cache for one proof kind.
    pub fn cache(&self, kind: ProofKind) -> &Arc<VerificationCache> {
        match kind {
            ProofKind::Signature => &self.signature,
            ProofKind::RangeProof => &self.range_proof,
            ProofKind::SurjectionProof => &self.surjection_proof,
        }
    }

    /// ECDSA checker on the signature cache.
    pub fn signature_checker(&self, store: bool) -> CachingSignatureChecker {
        CachingSignatureChecker::new(Arc::clone(&self.signature), store)
    }

    /// Range proof checker on the range proof cache.
    pub fn range_proof_checker<B: RangeProofBackend>(
        &self,
        backend: B,
        store: bool,
    ) -> CachingRangeProofChecker<B> {
        CachingRangeProofChecker::new(Arc::clone(&self.range_proof), backend, store)
    }

    /// Surjection proof checker on the surjection proof cache.
    pub fn surjection_proof_checker<B: SurjectionProofBackend>(
        &self,
        backend: B,
        store: bool,
    ) -> CachingSurjectionProofChecker<B> {
        CachingSurjectionProofChecker::new(Arc::clone(&self.surjection_proof), backend, store)
    }

    /// Per-kind report, in initialization order.
    pub fn report(&self) -> Vec<CacheReport> {
        ProofKind::ALL
            .into_iter()
            .map(|kind| CacheReport::new(self.cache(kind)))
            .collect()
    }

    /// Total bytes held by all three caches.
    pub fn memory_usage(&self) -> usize {
        ProofKind::ALL
            .into_iter()
            .map(|kind| self.cache(kind).memory_usage())
            .sum()
    }
}
