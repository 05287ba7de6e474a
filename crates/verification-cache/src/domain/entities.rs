//! # Domain Entities
//!
//! Verification requests and results for the three cached proof kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 256-bit digest (signature hash, hash of input tags).
pub type Hash = [u8; 32];

/// Serialized size of a Pedersen commitment.
pub const COMMITMENT_SIZE: usize = 33;

/// Serialized size of a blinded asset generator.
pub const GENERATOR_SIZE: usize = 33;

/// The kind of proof a cache instance remembers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProofKind {
    /// ECDSA signatures checked by script verification
    Signature,
    /// Range proofs on confidential output values
    RangeProof,
    /// Surjection proofs on confidential output assets
    SurjectionProof,
}

impl ProofKind {
    /// All kinds, in initialization order.
    pub const ALL: [ProofKind; 3] = [
        ProofKind::Signature,
        ProofKind::RangeProof,
        ProofKind::SurjectionProof,
    ];
}

impl fmt::Display for ProofKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProofKind::Signature => "signature",
            ProofKind::RangeProof => "range proof",
            ProofKind::SurjectionProof => "surjection proof",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Verification Requests
// =============================================================================

/// An ECDSA signature check triggered by a signature opcode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureCheck {
    /// Signature hash the key signed
    pub sighash: Hash,
    /// DER-encoded signature, hash-type byte already stripped
    pub signature: Vec<u8>,
    /// SEC1-encoded public key (33 or 65 bytes)
    pub public_key: Vec<u8>,
}

/// A range proof check on a confidential output value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeProofCheck {
    /// Serialized range proof
    pub proof: Vec<u8>,
    /// Pedersen commitment to the value
    pub commitment: Vec<u8>,
    /// Asset generator the value is committed under
    pub generator: Vec<u8>,
}

/// A surjection proof check on a confidential output asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurjectionProofCheck {
    /// Serialized surjection proof
    pub proof: Vec<u8>,
    /// Asset generators of the transaction inputs
    pub input_tags: Vec<Vec<u8>>,
    /// Asset generator of the output being checked
    pub output_generator: Vec<u8>,
}

// =============================================================================
// Results
// =============================================================================

/// Result of batch verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchVerificationResult {
    /// Individual results, in request order
    pub results: Vec<bool>,
    /// Whether all verifications passed
    pub all_valid: bool,
    /// Count of valid checks
    pub valid_count: usize,
    /// Count of invalid checks
    pub invalid_count: usize,
}

impl BatchVerificationResult {
    /// Create a batch result from individual results.
    pub fn from_results(results: Vec<bool>) -> Self {
        let valid_count = results.iter().filter(|&&valid| valid).count();
        let invalid_count = results.len() - valid_count;
        let all_valid = invalid_count == 0;

        Self {
            results,
            all_valid,
            valid_count,
            invalid_count,
        }
    }
}
