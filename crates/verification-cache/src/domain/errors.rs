//! # Verification Errors
//!
//! Error types for malformed verification inputs and cache configuration.
//!
//! A `VerifyError` never leaves an adapter: it is logged and turned into a
//! failed verification before the cache is consulted.

use thiserror::Error;

/// Reasons a verification input was rejected before any cache access.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The public key is not a valid SEC1 point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// The signature is not valid DER or has out-of-range scalars
    #[error("Invalid signature encoding")]
    InvalidSignatureEncoding,

    /// The Pedersen commitment failed to parse
    #[error("Invalid commitment")]
    InvalidCommitment,

    /// The asset generator failed to parse
    #[error("Invalid generator")]
    InvalidGenerator,

    /// The proof bytes failed to parse
    #[error("Invalid proof encoding")]
    InvalidProof,

    /// A fixed-size field has the wrong length
    #[error("Invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl VerifyError {
    /// Check that `bytes` is exactly `expected` long.
    pub fn expect_len(what: &'static str, bytes: &[u8], expected: usize) -> Result<(), Self> {
        if bytes.len() != expected {
            return Err(VerifyError::InvalidLength {
                what,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(())
    }
}

/// Cache configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A cache was configured with no memory at all
    #[error("{kind} cache size must be at least 1 MiB")]
    ZeroCacheSize { kind: String },

    /// A cache was configured above the supported maximum
    #[error("{kind} cache size {mib} MiB exceeds maximum of {max} MiB")]
    CacheSizeTooLarge { kind: String, mib: u64, max: u64 },
}
