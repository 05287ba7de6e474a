//! # Cached Surjection Proof Checker
//!
//! Entry = `H(nonce || SHA256(input tags) || output generator || proof)`.
//! The input tags are folded into the digest so a proof cached against one
//! input set never satisfies a check against another.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::check_cached;
use crate::cache::VerificationCache;
use crate::domain::entities::{Hash, SurjectionProofCheck, GENERATOR_SIZE};
use crate::domain::errors::VerifyError;
use crate::ports::inbound::ProofVerifier;
use crate::ports::outbound::SurjectionProofBackend;

/// SHA256 over the concatenated input tags.
pub fn input_tags_digest(input_tags: &[Vec<u8>]) -> Hash {
    let mut hasher = Sha256::new();
    for tag in input_tags {
        hasher.update(tag);
    }
    hasher.finalize().into()
}

/// Surjection proof checker backed by the shared surjection proof cache.
pub struct CachingSurjectionProofChecker<B: SurjectionProofBackend> {
    cache: Arc<VerificationCache>,
    backend: B,
    store: bool,
}

struct Parsed<B: SurjectionProofBackend> {
    proof: B::Proof,
    inputs: Vec<B::Generator>,
    output: B::Generator,
}

impl<B: SurjectionProofBackend> CachingSurjectionProofChecker<B> {
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

    fn parse(&self, check: &SurjectionProofCheck) -> Result<Parsed<B>, VerifyError> {
        VerifyError::expect_len("output generator", &check.output_generator, GENERATOR_SIZE)?;
        let output = self.backend.parse_generator(&check.output_generator)?;

        let inputs = check
            .input_tags
            .iter()
            .map(|tag| {
                VerifyError::expect_len("input tag", tag, GENERATOR_SIZE)?;
                self.backend.parse_generator(tag)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let proof = self.backend.parse_proof(&check.proof)?;
        Ok(Parsed {
            proof,
            inputs,
            output,
        })
    }
}

impl<B: SurjectionProofBackend> ProofVerifier for CachingSurjectionProofChecker<B> {
    type Check = SurjectionProofCheck;

    fn verify(&self, check: &SurjectionProofCheck) -> bool {
        let parsed = match self.parse(check) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, inputs = check.input_tags.len(), "Rejecting malformed surjection proof check");
                return false;
            }
        };

        let digest = input_tags_digest(&check.input_tags);
        let entry = self
            .cache
            .compute_entry(&digest, &check.proof, &check.output_generator);

        check_cached(&self.cache, entry, self.store, || {
            self.backend
                .verify_surjection_proof(&parsed.proof, &parsed.inputs, &parsed.output)
        })
    }
}
