//! # ECDSA Verification (secp256k1)
//!
//! The signature primitive behind the signature cache.
//!
//! ## Security Notes
//!
//! - **Strict DER**: signatures must be strict DER (hash-type byte removed)
//! - **Low-S normalization**: high S values are normalized before verifying,
//!   matching the node's consensus verification, which accepts both forms
//! - **Public keys**: compressed (33 bytes) or uncompressed (65 bytes) SEC1
//! - Uses k256 crate for cryptographic operations

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};

use super::entities::Hash;
use super::errors::VerifyError;
use crate::ports::outbound::SignatureBackend;

/// Compressed SEC1 public key length.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Uncompressed SEC1 public key length.
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// ECDSA verifier over secp256k1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Verifier;

impl Secp256k1Verifier {
    /// Create a new ECDSA verifier.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureBackend for Secp256k1Verifier {
    type PublicKey = VerifyingKey;
    type Signature = Signature;

    fn parse_public_key(&self, bytes: &[u8]) -> Result<VerifyingKey, VerifyError> {
        match bytes.len() {
            COMPRESSED_PUBLIC_KEY_SIZE | UNCOMPRESSED_PUBLIC_KEY_SIZE => {
                VerifyingKey::from_sec1_bytes(bytes).map_err(|_| VerifyError::InvalidPublicKey)
            }
            actual => Err(VerifyError::InvalidLength {
                what: "public key",
                expected: COMPRESSED_PUBLIC_KEY_SIZE,
                actual,
            }),
        }
    }

    fn parse_signature(&self, bytes: &[u8]) -> Result<Signature, VerifyError> {
        Signature::from_der(bytes).map_err(|_| VerifyError::InvalidSignatureEncoding)
    }

    fn verify_signature(
        &self,
        sighash: &Hash,
        signature: &Signature,
        public_key: &VerifyingKey,
    ) -> bool {
        // k256 only accepts low-S signatures
        let signature = signature.normalize_s().unwrap_or(*signature);
        public_key.verify_prehash(sighash, &signature).is_ok()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
