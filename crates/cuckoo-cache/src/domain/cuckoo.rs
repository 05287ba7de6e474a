//! # Cuckoo Cache
//!
//! Fixed-capacity set of 256-bit keys with cuckoo placement and epoch-based
//! lazy erasure.
//!
//! ## Placement
//!
//! Each key has 8 candidate slots, one per 4-byte window of the key. An
//! insert takes the first free candidate, otherwise it tries a short
//! displacement chain (move an occupant to one of *its* other candidates),
//! otherwise it overwrites a candidate, preferring one from the previous
//! generation.
//!
//! ## Generations
//!
//! Every slot carries a 1-bit generation tag and the table has a 1-bit
//! current generation. When too many recent inserts had to overwrite live
//! keys, the previous generation is retired:
//!
//! 1. A `retiring` flag makes every previous-generation slot dead at once.
//! 2. Each following insert sweeps `SWEEP_STRIDE` slots, setting the erase
//!    flag of the dead ones.
//! 3. When the sweep reaches the end, the current generation bit flips.
//!
//! No single operation ever walks the whole table, and the sweep guarantees
//! that no stale tag can alias the new current generation after the flip.
//!
//! | State    | `erased` | tag vs current | Hittable |
//! |----------|----------|----------------|----------|
//! | free     | set      | any            | no       |
//! | current  | clear    | equal          | yes      |
//! | previous | clear    | different      | yes, unless retiring |

use bitvec::prelude::*;
use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::debug;

use super::flags::AtomicBitFlags;
use super::key::{candidate_slots, CuckooKey, CANDIDATE_COUNT};
use crate::error::CacheError;
use crate::metrics::{CacheStats, CacheStatsSnapshot};

/// Maximum length of a displacement chain before falling back to eviction.
pub const MAX_DISPLACEMENT_HOPS: usize = 8;

/// Largest supported table. Bucket windows are 32 bits wide.
const MAX_CAPACITY: usize = 1 << 31;

/// Retire a generation once 1/8 of a window's inserts were forced evictions.
const FORCED_EVICTION_DIVISOR: u64 = 8;

/// Smallest heuristic window, in inserts.
const MIN_WINDOW_LEN: u64 = 16;

/// Slots swept per insert while a generation is retiring.
const SWEEP_STRIDE: usize = 16;

/// Running state that decides when to retire a generation.
#[derive(Clone, Debug, Default)]
struct EpochHeuristic {
    /// Inserts per observation window
    window_len: u64,
    /// Inserts seen in the current window
    window_inserts: u64,
    /// Forced evictions seen in the current window
    window_forced: u64,
    /// Previous generation is dead and being swept
    retiring: bool,
    /// Next slot to sweep
    sweep_cursor: usize,
}

impl EpochHeuristic {
    fn for_capacity(capacity: usize) -> Self {
        Self {
            window_len: (capacity as u64 / 16).max(MIN_WINDOW_LEN),
            ..Self::default()
        }
    }

    /// Count one insert. Returns true when a retirement should begin.
    fn observe(&mut self, forced: bool) -> bool {
        self.window_inserts += 1;
        if forced {
            self.window_forced += 1;
        }
        if self.window_inserts < self.window_len {
            return false;
        }

        let pressured = self.window_forced * FORCED_EVICTION_DIVISOR >= self.window_len;
        self.window_inserts = 0;
        self.window_forced = 0;
        pressured && !self.retiring
    }
}

/// Cuckoo cache over keys of type `K`.
///
/// Created empty with [`CuckooCache::new`] and sized once with
/// [`CuckooCache::setup_bytes`]. Before setup, lookups miss and inserts are
/// ignored.
#[derive(Debug)]
pub struct CuckooCache<K: CuckooKey> {
    /// Slot storage, indexed by slot number
    table: Vec<K>,
    /// Set = slot is free (never written or logically erased)
    erased: AtomicBitFlags,
    /// Generation tag per slot
    epochs: BitVec<u64, Lsb0>,
    /// Current generation
    generation: bool,
    /// `capacity - 1`
    mask: u32,
    heuristic: EpochHeuristic,
    stats: CacheStats,
}

impl<K: CuckooKey> Default for CuckooCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CuckooKey> CuckooCache<K> {
    /// Create an unsized cache. Call [`setup`](Self::setup) or
    /// [`setup_bytes`](Self::setup_bytes) before use.
    pub fn new() -> Self {
        Self {
            table: Vec::new(),
            erased: AtomicBitFlags::default(),
            epochs: BitVec::new(),
            generation: false,
            mask: 0,
            heuristic: EpochHeuristic::default(),
            stats: CacheStats::new(),
        }
    }

    /// Size of one slot in bytes.
    pub const fn slot_bytes() -> usize {
        std::mem::size_of::<K>()
    }

    /// Allocate room for the largest power of two not above `max_elements`.
    ///
    /// Resets all keys, generations, heuristic state and counters. Returns
    /// the achieved capacity.
    pub fn setup(&mut self, max_elements: usize) -> Result<usize, CacheError> {
        if max_elements == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        let bounded = max_elements.min(MAX_CAPACITY);
        let capacity = 1usize << (usize::BITS - 1 - bounded.leading_zeros());

        self.table = vec![K::default(); capacity];
        self.erased = AtomicBitFlags::new(capacity, true);
        self.epochs = bitvec![u64, Lsb0; 0; capacity];
        self.generation = false;
        self.mask = (capacity - 1) as u32;
        self.heuristic = EpochHeuristic::for_capacity(capacity);
        self.stats.reset();

        Ok(capacity)
    }

    /// Allocate the largest power-of-two table whose slots fit in
    /// `budget_bytes`. Flag storage comes on top (2 bits per slot).
    pub fn setup_bytes(&mut self, budget_bytes: usize) -> Result<usize, CacheError> {
        let slot_bytes = Self::slot_bytes();
        self.setup(budget_bytes / slot_bytes)
            .map_err(|_| CacheError::BudgetTooSmall {
                budget_bytes,
                slot_bytes,
            })
    }

    /// Number of slots (0 before setup).
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Bytes held by the slot table alone.
    pub fn table_bytes(&self) -> usize {
        self.table.len() * Self::slot_bytes()
    }

    /// Bytes held by the table plus both flag arrays.
    pub fn memory_usage(&self) -> usize {
        self.table_bytes()
            + self.erased.memory_usage()
            + self.epochs.as_raw_slice().len() * std::mem::size_of::<u64>()
    }

    /// Current generation bit.
    pub fn generation(&self) -> bool {
        self.generation
    }

    /// Whether the previous generation is currently being swept.
    pub fn is_retiring(&self) -> bool {
        self.heuristic.retiring
    }

    /// Counter snapshot.
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }

    /// Check whether `key` is live. With `erase`, a hit also frees its slot.
    ///
    /// Never mutates on a miss. `erase = true` must be called with exclusive
    /// access even though it only needs `&self`.
    pub fn contains(&self, key: &K, erase: bool) -> bool {
        if self.table.is_empty() {
            return false;
        }

        let found = candidate_slots(key, self.mask)
            .into_iter()
            .find(|&slot| self.table[slot] == *key && self.is_live(slot));

        self.stats.record_lookup(found.is_some());
        match found {
            Some(slot) => {
                if erase {
                    self.erased.set(slot);
                    self.stats.record_erasure();
                }
                true
            }
            None => false,
        }
    }

    /// Insert `key`. Always succeeds, possibly by evicting another key.
    pub fn insert(&mut self, key: K) {
        if self.table.is_empty() {
            return;
        }
        self.sweep_step();

        let slots = candidate_slots(&key, self.mask);

        if let Some(slot) = slots
            .iter()
            .copied()
            .find(|&slot| self.table[slot] == key && self.is_live(slot))
        {
            self.epochs.set(slot, self.generation);
            self.stats.record_refresh();
            return;
        }

        let forced = if let Some(slot) = slots.iter().copied().find(|&slot| !self.is_live(slot)) {
            self.place(slot, key);
            false
        } else if self.displace(&key, &slots) {
            self.stats.record_displacement();
            false
        } else {
            self.evict_into(&key, &slots);
            self.stats.record_forced_eviction();
            true
        };
        self.stats.record_insert();

        if self.heuristic.observe(forced) {
            debug!(
                capacity = self.capacity(),
                generation = self.generation,
                "Eviction pressure high, retiring previous cache generation"
            );
            self.begin_retirement();
        }
    }

    /// Kill the previous generation and start sweeping it.
    fn begin_retirement(&mut self) {
        self.heuristic.retiring = true;
        self.heuristic.sweep_cursor = 0;
    }

    fn is_live(&self, slot: usize) -> bool {
        !self.erased.is_set(slot)
            && !(self.heuristic.retiring && self.epochs[slot] != self.generation)
    }

    fn place(&mut self, slot: usize, key: K) {
        self.table[slot] = key;
        self.epochs.set(slot, self.generation);
        self.erased.clear(slot);
    }

    /// Copy the occupant of `from` (and its generation tag) into `to`.
    fn move_slot(&mut self, from: usize, to: usize) {
        self.table[to] = self.table[from];
        let tag = self.epochs[from];
        self.epochs.set(to, tag);
        self.erased.clear(to);
    }

    /// Try to free one of `slots` by shifting a chain of occupants.
    ///
    /// `path[i + 1]` is always a candidate of the occupant of `path[i]`, so
    /// shifting from the tail keeps every moved key reachable.
    fn displace(&mut self, key: &K, slots: &[usize; CANDIDATE_COUNT]) -> bool {
        let mut rng = rand::thread_rng();
        let mut path = [0usize; MAX_DISPLACEMENT_HOPS + 1];
        let mut len = 1;
        path[0] = slots[rng.gen_range(0..CANDIDATE_COUNT)];

        for _ in 0..MAX_DISPLACEMENT_HOPS {
            let current = path[len - 1];
            let alternates = candidate_slots(&self.table[current], self.mask);

            if let Some(free) = alternates
                .iter()
                .copied()
                .find(|&slot| slot != current && !self.is_live(slot))
            {
                self.move_slot(current, free);
                for i in (1..len).rev() {
                    self.move_slot(path[i - 1], path[i]);
                }
                self.place(path[0], *key);
                return true;
            }

            if len == path.len() {
                break;
            }
            let onward = alternates
                .iter()
                .copied()
                .filter(|slot| !path[..len].contains(slot))
                .choose(&mut rng);
            match onward {
                Some(next) => {
                    path[len] = next;
                    len += 1;
                }
                None => break,
            }
        }
        false
    }

    /// Overwrite a random candidate, preferring previous-generation slots.
    fn evict_into(&mut self, key: &K, slots: &[usize; CANDIDATE_COUNT]) {
        let mut rng = rand::thread_rng();
        let victim = slots
            .iter()
            .copied()
            .filter(|&slot| self.epochs[slot] != self.generation)
            .choose(&mut rng)
            .unwrap_or_else(|| slots[rng.gen_range(0..CANDIDATE_COUNT)]);
        self.place(victim, *key);
    }

    /// Advance the retirement sweep, flipping the generation when done.
    fn sweep_step(&mut self) {
        if !self.heuristic.retiring {
            return;
        }

        let capacity = self.capacity();
        let end = (self.heuristic.sweep_cursor + SWEEP_STRIDE).min(capacity);
        for slot in self.heuristic.sweep_cursor..end {
            if self.epochs[slot] != self.generation {
                self.erased.set(slot);
            }
        }
        self.heuristic.sweep_cursor = end;

        if end == capacity {
            self.generation = !self.generation;
            self.heuristic.retiring = false;
            self.heuristic.sweep_cursor = 0;
            self.stats.record_generation_advance();
            debug!(generation = self.generation, "Cache generation advanced");
        }
    }
}
