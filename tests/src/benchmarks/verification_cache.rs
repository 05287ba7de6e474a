//! # Cached Checker Benchmarks
//!
//! Compares a cache hit with a full verification for each checker, plus
//! batch signature verification on the rayon pool.

use std::time::Duration;

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use verification_cache::ProofVerifier;

use crate::fixtures::*;

pub fn bench_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("verification-cache/signature");
    group.measurement_time(Duration::from_secs(10));

    let caches = small_caches(4);
    let check = signed_check();

    let storing = caches.signature_checker(true);
    storing.verify(&check);
    group.bench_function("hit", |b| b.iter(|| black_box(storing.verify(&check))));

    let one_off = caches.signature_checker(false);
    let fresh = signed_check();
    group.bench_function("miss", |b| b.iter(|| black_box(one_off.verify(&fresh))));

    for size in [16, 128] {
        let checks: Vec<_> = (0..size).map(|_| signed_check()).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("batch_cold", size), &checks, |b, checks| {
            let checker = caches.signature_checker(false);
            b.iter(|| black_box(checker.verify_batch(checks).all_valid))
        });
        group.bench_with_input(BenchmarkId::new("batch_warm", size), &checks, |b, checks| {
            let checker = caches.signature_checker(true);
            checker.verify_batch(checks);
            b.iter(|| black_box(checker.verify_batch(checks).all_valid))
        });
    }

    group.finish();
}

pub fn bench_confidential_proofs(c: &mut Criterion) {
    let mut group = c.benchmark_group("verification-cache/confidential");

    let caches = small_caches(4);

    let range = caches.range_proof_checker(CountingBackend::default(), true);
    let check = range_check(true);
    range.verify(&check);
    group.bench_function("range_proof_hit", |b| b.iter(|| black_box(range.verify(&check))));

    for inputs in [2, 16] {
        let surjection = caches.surjection_proof_checker(CountingBackend::default(), true);
        let check = surjection_check(true, inputs);
        surjection.verify(&check);
        group.bench_with_input(
            BenchmarkId::new("surjection_proof_hit", inputs),
            &check,
            |b, check| b.iter(|| black_box(surjection.verify(check))),
        );
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_signature(c);
    bench_confidential_proofs(c);
}
