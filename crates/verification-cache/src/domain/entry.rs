//! # Cache Entries
//!
//! Derivation of cache keys from verification inputs.
//!
//! ## Security Notes
//!
//! - Entries are `SHA256(nonce || message digest || key bytes || proof bytes)`
//! - The nonce is drawn from the OS RNG once per cache and never leaves the
//!   process, so nobody outside it can precompute or collide entries
//! - Because entries are nonced hashes, every 4-byte window is uniformly
//!   distributed and is used directly as a bucket index

use std::fmt;

use cuckoo_cache::CuckooKey;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::entities::Hash;

/// Opaque 256-bit cache key.
///
/// Only [`EntryHasher::compute_entry`] produces meaningful entries.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Entry([u8; 32]);

impl Entry {
    /// Raw entry bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({})", hex::encode(&self.0[..8]))
    }
}

impl CuckooKey for Entry {
    fn window(&self, n: usize) -> u32 {
        self.0.window(n)
    }
}

/// Per-cache blinding value. Wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Nonce([u8; 32]);

impl Nonce {
    fn random() -> Self {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }
}

/// Computes entries under one process-lifetime nonce.
pub struct EntryHasher {
    nonce: Nonce,
}

impl EntryHasher {
    /// Create a hasher with a fresh nonce from the OS RNG.
    pub fn new() -> Self {
        Self {
            nonce: Nonce::random(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_nonce(nonce: [u8; 32]) -> Self {
        Self {
            nonce: Nonce(nonce),
        }
    }

    /// Derive the cache entry for one verification request.
    ///
    /// Identical inputs under the same hasher always give the same entry.
    pub fn compute_entry(&self, message_digest: &Hash, proof: &[u8], key: &[u8]) -> Entry {
        let mut hasher = Sha256::new();
        hasher.update(self.nonce.0);
        hasher.update(message_digest);
        hasher.update(key);
        hasher.update(proof);
        Entry(hasher.finalize().into())
    }
}

impl Default for EntryHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntryHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryHasher").finish_non_exhaustive()
    }
}
