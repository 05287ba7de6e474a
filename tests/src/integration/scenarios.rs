//! # Checker Scenarios
//!
//! End-to-end flows through `VerificationCaches` and the cached checkers.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use cuckoo_cache::CacheError;
    use sha2::{Digest, Sha256};
    use verification_cache::{
        input_tags_digest, CacheConfig, ProofKind, ProofVerifier, VerificationCache,
        VerificationCaches,
    };

    // =========================================================================
    // Store then hit
    // =========================================================================

    #[test]
    fn test_block_connection_hits_after_store() {
        let caches = small_caches(1);
        let backend = CountingBackend::default();
        let checker = caches.range_proof_checker(backend.clone(), true);
        let check = range_check(true);

        assert!(checker.verify(&check));
        assert_eq!(backend.calls(), 1);

        assert!(checker.verify(&check));
        assert_eq!(backend.calls(), 1, "second call must be served by the cache");
    }

    #[test]
    fn test_mempool_then_block_connection() {
        let caches = small_caches(1);
        let backend = CountingBackend::default();
        let check = surjection_check(true, 3);

        // Mempool acceptance stores
        let mempool = caches.surjection_proof_checker(backend.clone(), true);
        assert!(mempool.verify(&check));

        // Block connection reuses the result
        let connect = caches.surjection_proof_checker(backend.clone(), true);
        assert!(connect.verify(&check));
        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn test_signature_store_then_hit() {
        let caches = small_caches(1);
        let checker = caches.signature_checker(true);
        let check = signed_check();

        assert!(checker.verify(&check));
        assert!(checker.verify(&check));

        let report = &caches.report()[0];
        assert_eq!(report.inserts, 1);
        assert_eq!(report.hits, 1);
    }

    // =========================================================================
    // No store
    // =========================================================================

    #[test]
    fn test_no_store_verifies_every_time() {
        let caches = small_caches(1);
        let backend = CountingBackend::default();
        let checker = caches.range_proof_checker(backend.clone(), false);
        let check = range_check(true);

        assert!(checker.verify(&check));
        assert!(checker.verify(&check));
        assert_eq!(backend.calls(), 2);
        assert_eq!(caches.report()[1].inserts, 0);
    }

    #[test]
    fn test_failures_are_never_cached() {
        let caches = small_caches(1);
        let backend = CountingBackend::default();
        let checker = caches.surjection_proof_checker(backend.clone(), true);
        let check = surjection_check(false, 2);

        for _ in 0..3 {
            assert!(!checker.verify(&check));
        }
        assert_eq!(backend.calls(), 3);
    }

    // =========================================================================
    // Malformed input
    // =========================================================================

    #[test]
    fn test_malformed_commitment_leaves_no_trace() {
        let caches = small_caches(1);
        let backend = CountingBackend::default();
        let checker = caches.range_proof_checker(backend.clone(), true);

        let mut check = range_check(true);
        check.commitment[0] = 0x02;

        assert!(!checker.verify(&check));
        assert_eq!(backend.calls(), 0);

        let cache = caches.cache(ProofKind::RangeProof);
        let stats = cache.stats();
        assert_eq!(stats.lookups, 0);
        assert_eq!(stats.inserts, 0);

        let mut key = check.commitment.clone();
        key.extend_from_slice(&check.generator);
        let entry = cache.compute_entry(&[0u8; 32], &check.proof, &key);
        assert!(!cache.get(&entry, false));
    }

    #[test]
    fn test_malformed_signature_rejected() {
        let caches = small_caches(1);
        let checker = caches.signature_checker(true);

        let mut check = signed_check();
        check.signature.push(0x01); // trailing garbage breaks strict DER
        assert!(!checker.verify(&check));
        assert_eq!(caches.report()[0].lookups, 0);
    }

    // =========================================================================
    // Entry derivation
    // =========================================================================

    #[test]
    fn test_surjection_entry_covers_input_set() {
        let caches = small_caches(1);
        let cache = caches.cache(ProofKind::SurjectionProof);
        let check = surjection_check(true, 2);

        assert!(caches
            .surjection_proof_checker(CountingBackend::default(), true)
            .verify(&check));

        // Digest is SHA256 over the concatenated input tags
        let digest: [u8; 32] = Sha256::digest(check.input_tags.concat()).into();
        assert_eq!(input_tags_digest(&check.input_tags), digest);
        let entry = cache.compute_entry(&digest, &check.proof, &check.output_generator);
        assert!(cache.get(&entry, false));

        let first_only: [u8; 32] = Sha256::digest(&check.input_tags[0]).into();
        let partial = cache.compute_entry(&first_only, &check.proof, &check.output_generator);
        assert!(!cache.get(&partial, false));

        let other = cache.compute_entry(&[0u8; 32], &check.proof, &check.output_generator);
        assert!(!cache.get(&other, false));
    }

    #[test]
    fn test_nonce_separation() {
        let a = VerificationCache::new(ProofKind::Signature);
        let b = VerificationCache::new(ProofKind::Signature);
        a.setup_bytes(1 << 16).unwrap();
        b.setup_bytes(1 << 16).unwrap();

        let digest = random_hash();
        let entry_a = a.compute_entry(&digest, b"proof", b"key");
        let entry_b = b.compute_entry(&digest, b"proof", b"key");
        assert_ne!(entry_a, entry_b);

        a.put(entry_a);
        assert!(a.get(&entry_a, false));
        assert!(!b.get(&entry_b, false));
        assert!(!b.get(&entry_a, false));
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    #[test]
    fn test_overfill_stays_within_budget() {
        let cache = VerificationCache::new(ProofKind::RangeProof);
        let budget = 1 << 16;
        let capacity = cache.setup_bytes(budget).unwrap();
        assert!(capacity.is_power_of_two());

        let mut last = None;
        for i in 0..(capacity as u64 * 20) {
            let entry = cache.compute_entry(&[0u8; 32], &i.to_le_bytes(), b"overfill");
            cache.put(entry);
            last = Some(entry);
        }

        assert!(cache.table_bytes() <= budget);
        let stats = cache.stats();
        assert!(stats.forced_evictions > 0);
        assert!(stats.generation_advances > 0);
        assert!(cache.get(&last.unwrap(), false));
    }

    #[test]
    fn test_zero_budget_is_fatal() {
        let config = CacheConfig {
            signature_cache_mib: 0,
            ..CacheConfig::default()
        };
        assert!(matches!(
            VerificationCaches::init(&config),
            Err(CacheError::BudgetTooSmall { budget_bytes: 0, .. })
        ));
    }
}
