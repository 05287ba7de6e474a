//! # Outbound Ports (Driven Ports / SPI)
//!
//! The cryptographic primitives behind each checker. They are only invoked
//! on a cache miss.
//!
//! Each backend splits parsing from verification: parsing runs before any
//! cache access so that malformed encodings are rejected without ever
//! reading or writing the cache.

use crate::domain::entities::Hash;
use crate::domain::errors::VerifyError;

/// ECDSA signature verification.
pub trait SignatureBackend: Send + Sync {
    /// Parsed public key
    type PublicKey;
    /// Parsed signature
    type Signature;

    /// Parse a serialized public key.
    fn parse_public_key(&self, bytes: &[u8]) -> Result<Self::PublicKey, VerifyError>;

    /// Parse a serialized signature.
    fn parse_signature(&self, bytes: &[u8]) -> Result<Self::Signature, VerifyError>;

    /// Verify `signature` over `sighash` under `public_key`.
    fn verify_signature(
        &self,
        sighash: &Hash,
        signature: &Self::Signature,
        public_key: &Self::PublicKey,
    ) -> bool;
}

/// Range proof verification over Pedersen commitments.
pub trait RangeProofBackend: Send + Sync {
    /// Parsed Pedersen commitment
    type Commitment;
    /// Parsed asset generator
    type Generator;

    /// Parse a serialized commitment.
    fn parse_commitment(&self, bytes: &[u8]) -> Result<Self::Commitment, VerifyError>;

    /// Parse a serialized asset generator.
    fn parse_generator(&self, bytes: &[u8]) -> Result<Self::Generator, VerifyError>;

    /// Verify that `proof` shows the committed value is in range.
    fn verify_range_proof(
        &self,
        proof: &[u8],
        commitment: &Self::Commitment,
        generator: &Self::Generator,
    ) -> bool;
}

/// Surjection proof verification over blinded asset generators.
pub trait SurjectionProofBackend: Send + Sync {
    /// Parsed asset generator
    type Generator;
    /// Parsed surjection proof
    type Proof;

    /// Parse a serialized asset generator.
    fn parse_generator(&self, bytes: &[u8]) -> Result<Self::Generator, VerifyError>;

    /// Parse a serialized surjection proof.
    fn parse_proof(&self, bytes: &[u8]) -> Result<Self::Proof, VerifyError>;

    /// Verify that `output` is a re-blinding of one of `inputs`.
    fn verify_surjection_proof(
        &self,
        proof: &Self::Proof,
        inputs: &[Self::Generator],
        output: &Self::Generator,
    ) -> bool;
}
