//! # Verification Cache
//!
//! Remembers which signatures, range proofs and surjection proofs already
//! verified, so block connection does not redo work done at mempool
//! acceptance.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): requests, entries, config, ECDSA backend
//! - **Ports Layer** (`ports/`): `ProofVerifier` and the proof backends
//! - **Cache** (`cache.rs`): one nonced cuckoo table behind a reader/writer lock
//! - **Adapters** (`adapters/`): cached checkers, one per proof kind
//! - **Service** (`service.rs`): `VerificationCaches`, the per-node registry
//!
//! ## Guarantees
//!
//! - A cache hit only ever stands in for a verification that succeeded.
//!   Failures are never cached.
//! - Malformed inputs are rejected before the cache is read or written.
//! - Entries are keyed with a per-cache random nonce.
//!
//! ## Usage Example
//!
//! ```
//! use verification_cache::{CacheConfigBuilder, ProofVerifier, SignatureCheck, VerificationCaches};
//!
//! let config = CacheConfigBuilder::new()
//!     .signature_cache_mib(1)
//!     .range_proof_cache_mib(1)
//!     .surjection_proof_cache_mib(1)
//!     .build()
//!     .expect("Valid config");
//! let caches = VerificationCaches::init(&config).expect("budgets are valid");
//!
//! let checker = caches.signature_checker(true);
//! let check = SignatureCheck {
//!     sighash: [0u8; 32],
//!     signature: vec![0x30, 0x00],
//!     public_key: vec![0x02; 33],
//! };
//! assert!(!checker.verify(&check));
//! ```

pub mod adapters;
pub mod cache;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{CachingRangeProofChecker, CachingSignatureChecker, CachingSurjectionProofChecker};
pub use adapters::surjection_proof::input_tags_digest;
pub use cache::VerificationCache;
pub use cuckoo_cache::{CacheError, CacheStatsSnapshot};
pub use domain::config::{CacheConfig, CacheConfigBuilder, DEFAULT_CACHE_SIZE_MIB, MAX_CACHE_SIZE_MIB};
pub use domain::ecdsa::Secp256k1Verifier;
pub use domain::entities::{
    BatchVerificationResult, Hash, ProofKind, RangeProofCheck, SignatureCheck, SurjectionProofCheck,
    COMMITMENT_SIZE, GENERATOR_SIZE,
};
pub use domain::entry::{Entry, EntryHasher};
pub use domain::errors::{ConfigError, VerifyError};
pub use ports::inbound::ProofVerifier;
pub use ports::outbound::{RangeProofBackend, SignatureBackend, SurjectionProofBackend};
pub use service::{CacheReport, VerificationCaches};
