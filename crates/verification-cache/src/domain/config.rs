//! Verification cache configuration and validation
//!
//! Each proof kind gets its own memory budget in MiB. Budgets are fixed at
//! startup; the caches never grow past them.
//!
//! # Example
//!
//! ```
//! use verification_cache::{CacheConfigBuilder, ProofKind};
//!
//! let config = CacheConfigBuilder::new()
//!     .signature_cache_mib(64)
//!     .range_proof_cache_mib(16)
//!     .build()
//!     .expect("Valid config");
//!
//! assert_eq!(config.bytes_for(ProofKind::Signature), 64 << 20);
//! ```

use serde::{Deserialize, Serialize};

use super::entities::ProofKind;
use super::errors::ConfigError;

/// Default budget per cache, in MiB.
pub const DEFAULT_CACHE_SIZE_MIB: u64 = 32;

/// Largest accepted budget per cache, in MiB.
pub const MAX_CACHE_SIZE_MIB: u64 = 16_384;

/// Memory budgets for the three verification caches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// ECDSA signature cache size (MiB)
    pub signature_cache_mib: u64,
    /// Range proof cache size (MiB)
    pub range_proof_cache_mib: u64,
    /// Surjection proof cache size (MiB)
    pub surjection_proof_cache_mib: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            signature_cache_mib: DEFAULT_CACHE_SIZE_MIB,
            range_proof_cache_mib: DEFAULT_CACHE_SIZE_MIB,
            surjection_proof_cache_mib: DEFAULT_CACHE_SIZE_MIB,
        }
    }
}

impl CacheConfig {
    /// Budget for one kind, in MiB.
    pub fn mib_for(&self, kind: ProofKind) -> u64 {
        match kind {
            ProofKind::Signature => self.signature_cache_mib,
            ProofKind::RangeProof => self.range_proof_cache_mib,
            ProofKind::SurjectionProof => self.surjection_proof_cache_mib,
        }
    }

    /// Budget for one kind, in bytes. Saturates at `usize::MAX`.
    pub fn bytes_for(&self, kind: ProofKind) -> usize {
        let bytes = self.mib_for(kind).saturating_mul(1 << 20);
        usize::try_from(bytes).unwrap_or(usize::MAX)
    }

    /// Validate every budget is within `1..=MAX_CACHE_SIZE_MIB`
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in ProofKind::ALL {
            let mib = self.mib_for(kind);
            if mib == 0 {
                return Err(ConfigError::ZeroCacheSize {
                    kind: kind.to_string(),
                });
            }
            if mib > MAX_CACHE_SIZE_MIB {
                return Err(ConfigError::CacheSizeTooLarge {
                    kind: kind.to_string(),
                    mib,
                    max: MAX_CACHE_SIZE_MIB,
                });
            }
        }
        Ok(())
    }

    /// Clamp an operator-supplied size into `0..=MAX_CACHE_SIZE_MIB`.
    pub fn clamp_mib(requested: i64) -> u64 {
        requested.clamp(0, MAX_CACHE_SIZE_MIB as i64) as u64
    }

    /// Builder-style method to set one kind's budget
    pub fn with_cache_mib(mut self, kind: ProofKind, mib: u64) -> Self {
        match kind {
            ProofKind::Signature => self.signature_cache_mib = mib,
            ProofKind::RangeProof => self.range_proof_cache_mib = mib,
            ProofKind::SurjectionProof => self.surjection_proof_cache_mib = mib,
        }
        self
    }
}

/// Builder for CacheConfig with validation
#[derive(Default)]
pub struct CacheConfigBuilder {
    signature_cache_mib: Option<u64>,
    range_proof_cache_mib: Option<u64>,
    surjection_proof_cache_mib: Option<u64>,
}

impl CacheConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signature_cache_mib(mut self, mib: u64) -> Self {
        self.signature_cache_mib = Some(mib);
        self
    }

    pub fn range_proof_cache_mib(mut self, mib: u64) -> Self {
        self.range_proof_cache_mib = Some(mib);
        self
    }

    pub fn surjection_proof_cache_mib(mut self, mib: u64) -> Self {
        self.surjection_proof_cache_mib = Some(mib);
        self
    }

    /// Build the CacheConfig, validating all budgets
    pub fn build(self) -> Result<CacheConfig, ConfigError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> CacheConfig {
        let defaults = CacheConfig::default();

        CacheConfig {
            signature_cache_mib: self
                .signature_cache_mib
                .unwrap_or(defaults.signature_cache_mib),
            range_proof_cache_mib: self
                .range_proof_cache_mib
                .unwrap_or(defaults.range_proof_cache_mib),
            surjection_proof_cache_mib: self
                .surjection_proof_cache_mib
                .unwrap_or(defaults.surjection_proof_cache_mib),
        }
    }
}
