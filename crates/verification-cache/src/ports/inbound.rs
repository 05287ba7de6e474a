//! # Inbound Ports (Driving Ports / API)
//!
//! The single capability shared by all cached checkers.

/// A checker that answers "is this proof valid?".
///
/// Implemented independently by the signature, range proof and surjection
/// proof checkers. Implementations must be thread-safe (`Send + Sync`);
/// validation workers call them concurrently.
pub trait ProofVerifier: Send + Sync {
    /// The request this checker understands.
    type Check;

    /// Verify one request.
    ///
    /// Returns `false` for malformed input and for proofs that do not
    /// verify. A cache hit can only turn a previously successful
    /// verification into a skip; it never produces `false`.
    fn verify(&self, check: &Self::Check) -> bool;
}
