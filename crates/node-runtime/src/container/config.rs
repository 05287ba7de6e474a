//! # Node Configuration
//!
//! Runtime parameters for the node, loaded from defaults and the environment.
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `NODE_MAX_SIG_CACHE_SIZE` | `caches.signature_cache_mib` |
//! | `NODE_MAX_RANGEPROOF_CACHE_SIZE` | `caches.range_proof_cache_mib` |
//! | `NODE_MAX_SURJECTIONPROOF_CACHE_SIZE` | `caches.surjection_proof_cache_mib` |
//!
//! Values are in MiB and clamped to `0..=MAX_CACHE_SIZE_MIB`.
//! `NODE_CACHE_REPORT_INTERVAL_SECS` sets `report_interval` in whole seconds.

use std::time::Duration;

use thiserror::Error;
use tracing::warn;
use verification_cache::{CacheConfig, ProofKind};

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Verification cache budgets.
    pub caches: CacheConfig,
    /// How often cache statistics are logged.
    pub report_interval: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            caches: CacheConfig::default(),
            report_interval: Duration::from_secs(60),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid cache configuration: {0}")]
    Cache(#[from] verification_cache::ConfigError),

    #[error("{var} must be an integer number of MiB, got {value:?}")]
    NotAnInteger { var: &'static str, value: String },

    #[error("{var} must be an integer number of seconds, got {value:?}")]
    InvalidInterval { var: &'static str, value: String },

    #[error("report interval must be non-zero")]
    ZeroReportInterval,
}

/// Environment variable holding the budget for `kind`.
pub fn cache_size_var(kind: ProofKind) -> &'static str {
    match kind {
        ProofKind::Signature => "NODE_MAX_SIG_CACHE_SIZE",
        ProofKind::RangeProof => "NODE_MAX_RANGEPROOF_CACHE_SIZE",
        ProofKind::SurjectionProof => "NODE_MAX_SURJECTIONPROOF_CACHE_SIZE",
    }
}

impl NodeConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        for kind in ProofKind::ALL {
            let var = cache_size_var(kind);
            let Some(value) = lookup(var) else {
                continue;
            };

            let requested: i64 = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::NotAnInteger { var, value: value.clone() })?;
            let mib = CacheConfig::clamp_mib(requested);
            if mib as i64 != requested {
                warn!("{} = {} out of range, using {} MiB", var, requested, mib);
            }
            self.caches = self.caches.clone().with_cache_mib(kind, mib);
        }

        let var = "NODE_CACHE_REPORT_INTERVAL_SECS";
        if let Some(value) = lookup(var) {
            let secs: u64 = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidInterval { var, value: value.clone() })?;
            self.report_interval = Duration::from_secs(secs);
        }
        Ok(())
    }

    /// Validate the configuration before any subsystem is created.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.caches.validate()?;
        if self.report_interval.is_zero() {
            return Err(ConfigError::ZeroReportInterval);
        }
        Ok(())
    }
}
