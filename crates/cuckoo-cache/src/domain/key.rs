//! Cache keys and bucket windows
//!
//! Keys stored in the cache are outputs of a cryptographic hash over a
//! secret nonce, so every 4-byte window of a key is already uniformly
//! distributed. The 8 disjoint windows of a 256-bit key serve directly as 8
//! independent bucket indices; no extra hash functions are needed.

/// Number of candidate slots per key.
pub const CANDIDATE_COUNT: usize = 8;

/// A fixed-width key that can be placed in a [`CuckooCache`](super::CuckooCache).
///
/// `window(n)` must return independent, uniformly distributed values for
/// every `n < CANDIDATE_COUNT`. Only keys derived from a keyed/nonced hash
/// satisfy this.
pub trait CuckooKey: Copy + Eq + Default {
    /// Return the `n`-th 32-bit window of the key (`n < CANDIDATE_COUNT`).
    fn window(&self, n: usize) -> u32;
}

impl CuckooKey for [u8; 32] {
    fn window(&self, n: usize) -> u32 {
        let start = n * 4;
        u32::from_le_bytes([
            self[start],
            self[start + 1],
            self[start + 2],
            self[start + 3],
        ])
    }
}

/// Map every window of `key` onto a slot of a power-of-two table.
pub(crate) fn candidate_slots<K: CuckooKey>(key: &K, mask: u32) -> [usize; CANDIDATE_COUNT] {
    let mut slots = [0usize; CANDIDATE_COUNT];
    for (n, slot) in slots.iter_mut().enumerate() {
        *slot = (key.window(n) & mask) as usize;
    }
    slots
}
