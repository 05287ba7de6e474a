//! # Test Fixtures
//!
//! Signed ECDSA checks and counting backends for range and surjection
//! proofs.
//!
//! The proof backends accept 33-byte commitments starting with 0x08/0x09 and
//! 33-byte generators starting with 0x0a/0x0b. A proof verifies when its
//! first byte is 0x01.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};
use rand::{Rng, RngCore};
use verification_cache::{
    CacheConfig, Hash, RangeProofBackend, RangeProofCheck, SignatureCheck, SurjectionProofBackend,
    SurjectionProofCheck, VerificationCaches, VerifyError, COMMITMENT_SIZE, GENERATOR_SIZE,
};

/// Caches small enough to fill in a test.
pub fn small_caches(mib: u64) -> VerificationCaches {
    let config = CacheConfig {
        signature_cache_mib: mib,
        range_proof_cache_mib: mib,
        surjection_proof_cache_mib: mib,
    };
    VerificationCaches::init(&config).expect("test budgets are valid")
}

pub fn random_hash() -> Hash {
    let mut hash = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut hash);
    hash
}

/// A valid signature check over a random sighash with a fresh key.
pub fn signed_check() -> SignatureCheck {
    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let sighash = random_hash();
    let signature: Signature = signing_key
        .sign_prehash(&sighash)
        .expect("prehash is 32 bytes");

    SignatureCheck {
        sighash,
        signature: signature.to_der().as_bytes().to_vec(),
        public_key: signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec(),
    }
}

pub fn commitment() -> Vec<u8> {
    let mut bytes = vec![0u8; COMMITMENT_SIZE];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes[0] = 0x08 | rand::thread_rng().gen_range(0..2);
    bytes
}

pub fn generator() -> Vec<u8> {
    let mut bytes = vec![0u8; GENERATOR_SIZE];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes[0] = 0x0a | rand::thread_rng().gen_range(0..2);
    bytes
}

/// A proof the counting backend accepts (or rejects).
pub fn proof(valid: bool) -> Vec<u8> {
    let mut bytes = vec![0u8; 64];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes[0] = u8::from(valid);
    bytes
}

pub fn range_check(valid: bool) -> RangeProofCheck {
    RangeProofCheck {
        proof: proof(valid),
        commitment: commitment(),
        generator: generator(),
    }
}

pub fn surjection_check(valid: bool, inputs: usize) -> SurjectionProofCheck {
    SurjectionProofCheck {
        proof: proof(valid),
        input_tags: (0..inputs).map(|_| generator()).collect(),
        output_generator: generator(),
    }
}

/// Proof backend that counts verifications.
///
/// Clones share one counter.
#[derive(Clone, Default)]
pub struct CountingBackend {
    calls: Arc<AtomicUsize>,
}

impl CountingBackend {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn verdict(&self, proof: &[u8]) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        proof.first() == Some(&0x01)
    }
}

fn parse_point(bytes: &[u8], len: usize, tag: u8, err: VerifyError) -> Result<Vec<u8>, VerifyError> {
    match bytes.first() {
        Some(&first) if bytes.len() == len && first & 0xFE == tag => Ok(bytes.to_vec()),
        _ => Err(err),
    }
}

impl RangeProofBackend for CountingBackend {
    type Commitment = Vec<u8>;
    type Generator = Vec<u8>;

    fn parse_commitment(&self, bytes: &[u8]) -> Result<Vec<u8>, VerifyError> {
        parse_point(bytes, COMMITMENT_SIZE, 0x08, VerifyError::InvalidCommitment)
    }

    fn parse_generator(&self, bytes: &[u8]) -> Result<Vec<u8>, VerifyError> {
        parse_point(bytes, GENERATOR_SIZE, 0x0a, VerifyError::InvalidGenerator)
    }

    fn verify_range_proof(&self, proof: &[u8], _: &Vec<u8>, _: &Vec<u8>) -> bool {
        self.verdict(proof)
    }
}

impl SurjectionProofBackend for CountingBackend {
    type Generator = Vec<u8>;
    type Proof = Vec<u8>;

    fn parse_generator(&self, bytes: &[u8]) -> Result<Vec<u8>, VerifyError> {
        parse_point(bytes, GENERATOR_SIZE, 0x0a, VerifyError::InvalidGenerator)
    }

    fn parse_proof(&self, bytes: &[u8]) -> Result<Vec<u8>, VerifyError> {
        if bytes.is_empty() {
            return Err(VerifyError::InvalidProof);
        }
        Ok(bytes.to_vec())
    }

    fn verify_surjection_proof(&self, proof: &Vec<u8>, _: &[Vec<u8>], _: &Vec<u8>) -> bool {
        self.verdict(proof)
    }
}
