//! # Cached Range Proof Checker
//!
//! Entry = `H(nonce || 0^32 || commitment || generator || proof)`. Range
//! proofs commit to no message, so the digest slot is all zeroes.

use std::sync::Arc;

use tracing::debug;

use super::check_cached;
use crate::cache::VerificationCache;
use crate::domain::entities::{Hash, RangeProofCheck, COMMITMENT_SIZE, GENERATOR_SIZE};
use crate::domain::errors::VerifyError;
use crate::ports::inbound::ProofVerifier;
use crate::ports::outbound::RangeProofBackend;

const NO_MESSAGE: Hash = [0u8; 32];

/// Range proof checker backed by the shared range proof cache.
pub struct CachingRangeProofChecker<B: RangeProofBackend> {
    cache: Arc<VerificationCache>,
    backend: B,
    store: bool,
}

impl<B: RangeProofBackend> CachingRangeProofChecker<B> {
    pub fn new(cache: Arc<VerificationCache>, backend: B, store: bool) -> Self {
        Self {
            cache,
            backend,
            store,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn parse(&self, check: &RangeProofCheck) -> Result<(B::Commitment, B::Generator), VerifyError> {
        VerifyError::expect_len("commitment", &check.commitment, COMMITMENT_SIZE)?;
        VerifyError::expect_len("generator", &check.generator, GENERATOR_SIZE)?;
        let commitment = self.backend.parse_commitment(&check.commitment)?;
        let generator = self.backend.parse_generator(&check.generator)?;
        Ok((commitment, generator))
    }
}

impl<B: RangeProofBackend> ProofVerifier for CachingRangeProofChecker<B> {
    type Check = RangeProofCheck;

    fn verify(&self, check: &RangeProofCheck) -> bool {
        let (commitment, generator) = match self.parse(check) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "Rejecting malformed range proof check");
                return false;
            }
        };

        let mut key = [0u8; COMMITMENT_SIZE + GENERATOR_SIZE];
        key[..COMMITMENT_SIZE].copy_from_slice(&check.commitment);
        key[COMMITMENT_SIZE..].copy_from_slice(&check.generator);
        let entry = self.cache.compute_entry(&NO_MESSAGE, &check.proof, &key);

        check_cached(&self.cache, entry, self.store, || {
            self.backend
                .verify_range_proof(&check.proof, &commitment, &generator)
        })
    }
}
