//! # Verification Cache Benchmarks
//!
//! | Path | Expectation |
//! |------|-------------|
//! | Engine lookup, hit or miss | constant time, 8 candidate slots |
//! | Engine insert at full load | bounded by the displacement limit |
//! | Cached signature check, hit | no ECDSA verification |
//! | Cached signature check, miss | one ECDSA verification plus hashing |

use criterion::{criterion_group, criterion_main, Criterion};
use node_tests::benchmarks::{cuckoo_cache, verification_cache};

fn engine(c: &mut Criterion) {
    cuckoo_cache::register_benchmarks(c);
}

fn checkers(c: &mut Criterion) {
    verification_cache::register_benchmarks(c);
}

criterion_group!(benches, engine, checkers);
criterion_main!(benches);
