//! # Concurrent Validation
//!
//! Many validation threads sharing one set of caches.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use rayon::prelude::*;
    use verification_cache::{Entry, ProofKind, ProofVerifier, VerificationCache};

    use crate::fixtures::*;

    #[test]
    fn test_no_false_positives_under_contention() {
        let cache = Arc::new(VerificationCache::new(ProofKind::Signature));
        // Small table so writers evict constantly
        cache.setup_bytes(1 << 12).unwrap();

        let writers: Vec<_> = (0..4u64)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..5_000u64 {
                        let entry = cache.compute_entry(&[1u8; 32], &(t << 32 | i).to_le_bytes(), b"w");
                        cache.put(entry);
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4u64)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let mut false_positives = 0;
                    for i in 0..5_000u64 {
                        // Different key bytes: never inserted
                        let entry = cache.compute_entry(&[1u8; 32], &(t << 32 | i).to_le_bytes(), b"r");
                        if cache.get(&entry, i % 2 == 0) {
                            false_positives += 1;
                        }
                    }
                    false_positives
                })
            })
            .collect();

        for writer in writers {
            writer.join().unwrap();
        }
        let false_positives: usize = readers.into_iter().map(|r| r.join().unwrap()).sum();
        assert_eq!(false_positives, 0);
        assert!(cache.table_bytes() <= 1 << 12);
    }

    #[test]
    fn test_random_population_has_no_false_positives() {
        let cache = VerificationCache::new(ProofKind::RangeProof);
        cache.setup_bytes(1 << 16).unwrap();

        let inserted: HashSet<Entry> = (0..4_000)
            .map(|_| {
                let entry = cache.compute_entry(&random_hash(), b"", b"");
                cache.put(entry);
                entry
            })
            .collect();

        for _ in 0..100_000 {
            let absent = cache.compute_entry(&random_hash(), b"", b"");
            if !inserted.contains(&absent) {
                assert!(!cache.get(&absent, false));
            }
        }
    }

    #[test]
    fn test_parallel_checkers_agree_with_backend() {
        let caches = small_caches(1);
        let backend = CountingBackend::default();

        let checks: Vec<_> = (0..256).map(|i| range_check(i % 3 != 0)).collect();
        let expected: Vec<bool> = checks.iter().map(|c| c.proof[0] == 0x01).collect();

        // Two passes: the second is mostly served by the cache
        for _ in 0..2 {
            let results: Vec<bool> = checks
                .par_iter()
                .map(|check| {
                    caches
                        .range_proof_checker(backend.clone(), true)
                        .verify(check)
                })
                .collect();
            assert_eq!(results, expected);
        }

        let valid = expected.iter().filter(|&&v| v).count();
        let invalid = expected.len() - valid;
        // Valid proofs verified once, invalid ones every pass
        assert_eq!(backend.calls(), valid + 2 * invalid);
    }

    #[test]
    fn test_signature_batch_on_rayon_pool() {
        let caches = small_caches(1);
        let checker = caches.signature_checker(true);

        let mut checks: Vec<_> = (0..64).map(|_| signed_check()).collect();
        checks[10].sighash[0] ^= 0x80;
        checks[20].public_key[0] = 0x07;

        let result = checker.verify_batch(&checks);
        assert_eq!(result.valid_count, 62);
        assert!(!result.results[10]);
        assert!(!result.results[20]);

        let again = checker.verify_batch(&checks);
        assert_eq!(again, result);
        assert_eq!(caches.report()[0].hits, 62);
    }
}
