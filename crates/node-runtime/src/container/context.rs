//! # Validation Context
//!
//! Shared state for transaction and block validation.
//!
//! Script verification asks for a signature checker; confidential output
//! validation asks for range and surjection proof checkers. `store` is set
//! while connecting blocks and unset for mempool policy checks.

use std::sync::Arc;

use tracing::info;
use verification_cache::{
    CacheError, CacheReport, CachingRangeProofChecker, CachingSignatureChecker,
    CachingSurjectionProofChecker, RangeProofBackend, SurjectionProofBackend, VerificationCaches,
};

use super::config::NodeConfig;

/// Cloneable handle to the node's verification caches.
#[derive(Clone, Debug)]
pub struct ValidationContext {
    caches: Arc<VerificationCaches>,
}

impl ValidationContext {
    /// Size the caches from `config`.
    pub fn new(config: &NodeConfig) -> Result<Self, CacheError> {
        let caches = VerificationCaches::init(&config.caches)?;
        Ok(Self {
            caches: Arc::new(caches),
        })
    }

    pub fn caches(&self) -> &Arc<VerificationCaches> {
        &self.caches
    }

    pub fn signature_checker(&self, store: bool) -> CachingSignatureChecker {
        self.caches.signature_checker(store)
    }

    pub fn range_proof_checker<B: RangeProofBackend>(
        &self,
        backend: B,
        store: bool,
    ) -> CachingRangeProofChecker<B> {
        self.caches.range_proof_checker(backend, store)
    }

    pub fn surjection_proof_checker<B: SurjectionProofBackend>(
        &self,
        backend: B,
        store: bool,
    ) -> CachingSurjectionProofChecker<B> {
        self.caches.surjection_proof_checker(backend, store)
    }

    /// Log one line per cache with its counters.
    pub fn log_report(&self) -> Vec<CacheReport> {
        let report = self.caches.report();
        for entry in &report {
            info!(
                kind = %entry.kind,
                capacity = entry.capacity,
                lookups = entry.lookups,
                hit_rate = entry.hit_rate,
                forced_evictions = entry.forced_evictions,
                generation_advances = entry.generation_advances,
                "Verification cache report"
            );
        }
        report
    }

    /// Release the caches.
    ///
    /// Memory is returned once the last clone of this context is dropped.
    pub fn teardown(self) {
        let bytes = self.caches.memory_usage();
        let holders = Arc::strong_count(&self.caches);
        drop(self);
        info!(
            "Released verification caches ({} MiB, {} other holders)",
            bytes >> 20,
            holders - 1
        );
    }
}
