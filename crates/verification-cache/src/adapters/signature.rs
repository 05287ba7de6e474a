//! # Cached Signature Checker
//!
//! Entry = `H(nonce || sighash || public key || signature)`.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use super::check_cached;
use crate::cache::VerificationCache;
use crate::domain::ecdsa::Secp256k1Verifier;
use crate::domain::entities::{BatchVerificationResult, SignatureCheck};
use crate::ports::inbound::ProofVerifier;
use crate::ports::outbound::SignatureBackend;

/// ECDSA checker backed by the shared signature cache.
pub struct CachingSignatureChecker<B: SignatureBackend = Secp256k1Verifier> {
    cache: Arc<VerificationCache>,
    backend: B,
    store: bool,
}

impl CachingSignatureChecker<Secp256k1Verifier> {
    /// Checker using the k256 backend.
    ///
    /// `store` is set while connecting blocks and unset for one-off checks.
    pub fn new(cache: Arc<VerificationCache>, store: bool) -> Self {
        Self::with_backend(cache, Secp256k1Verifier::new(), store)
    }
}

impl<B: SignatureBackend> CachingSignatureChecker<B> {
    pub fn with_backend(cache: Arc<VerificationCache>, backend: B, store: bool) -> Self {
        Self {
            cache,
            backend,
            store,
        }
    }

    /// Whether successful verifications are remembered.
    pub fn stores(&self) -> bool {
        self.store
    }

    /// Verify many signatures on the rayon pool.
    ///
    /// Each check follows the same cache discipline as [`ProofVerifier::verify`].
    pub fn verify_batch(&self, checks: &[SignatureCheck]) -> BatchVerificationResult {
        let results: Vec<bool> = checks.par_iter().map(|check| self.verify(check)).collect();
        BatchVerificationResult::from_results(results)
    }
}

impl<B: SignatureBackend> ProofVerifier for CachingSignatureChecker<B> {
    type Check = SignatureCheck;

    fn verify(&self, check: &SignatureCheck) -> bool {
        let parsed = self
            .backend
            .parse_signature(&check.signature)
            .and_then(|sig| Ok((sig, self.backend.parse_public_key(&check.public_key)?)));
        let (signature, public_key) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "Rejecting malformed signature check");
                return false;
            }
        };

        let entry = self
            .cache
            .compute_entry(&check.sighash, &check.signature, &check.public_key);

        check_cached(&self.cache, entry, self.store, || {
            self.backend
                .verify_signature(&check.sighash, &signature, &public_key)
        })
    }
}
