//! Packed per-slot flags
//!
//! One bit per table slot, stored eight to a byte. Updates go through
//! atomics so a lookup that only holds `&self` can still mark a slot erased.
//! Ordering is `Relaxed`; the caller's lock provides happens-before.

use std::sync::atomic::{AtomicU8, Ordering};

/// Bit-indexed flag array addressed by slot index.
#[derive(Debug, Default)]
pub struct AtomicBitFlags {
    bytes: Vec<AtomicU8>,
    len: usize,
}

impl AtomicBitFlags {
    /// Create `len` flags, all set or all clear.
    pub fn new(len: usize, set: bool) -> Self {
        let fill = if set { 0xff } else { 0x00 };
        let bytes = (0..len.div_ceil(8)).map(|_| AtomicU8::new(fill)).collect();
        Self { bytes, len }
    }

    /// Number of flags.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes of backing storage.
    pub fn memory_usage(&self) -> usize {
        self.bytes.len()
    }

    pub fn set(&self, index: usize) {
        self.bytes[index >> 3].fetch_or(1 << (index & 7), Ordering::Relaxed);
    }

    pub fn clear(&self, index: usize) {
        self.bytes[index >> 3].fetch_and(!(1 << (index & 7)), Ordering::Relaxed);
    }

    pub fn is_set(&self, index: usize) -> bool {
        self.bytes[index >> 3].load(Ordering::Relaxed) & (1 << (index & 7)) != 0
    }
}
