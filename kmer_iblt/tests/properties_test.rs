//! Property-based tests over the IBLT engine itself (construction order
//! independence and the empirical peelability bound), complementing the
//! fixed scenarios in `iblt_tests.rs` and the hash-level properties in
//! `hash_functions_test.rs`.

use kmer_iblt::{save, Iblt, Reconcilable};
use proptest::prelude::*;

fn pack_kmer(k: u8, value: u64) -> Vec<u8> {
    let byte_len = ((2 * u64::from(k) + 7) / 8) as usize;
    value.to_be_bytes()[8 - byte_len..].to_vec()
}

proptest! {
    // P2: insertion order must not affect the serialized sketch.
    #[test]
    fn prop_insertion_order_is_commutative(
        mut values in prop::collection::hash_set(0u64..4096, 1..40),
    ) {
        let values: Vec<u64> = values.drain().collect();
        let mut forward = Iblt::new(12, 4, 0.3, 64, 9).unwrap();
        for &v in &values {
            forward.insert(&pack_kmer(12, v)).unwrap();
        }

        let mut reversed = Iblt::new(12, 4, 0.3, 64, 9).unwrap();
        for &v in values.iter().rev() {
            reversed.insert(&pack_kmer(12, v)).unwrap();
        }

        prop_assert_eq!(save(&forward), save(&reversed));
    }
}

proptest! {
    // P4: failure rate should stay low while the drawn difference size sits
    // comfortably under the configured budget; this is a loose upper-bound
    // sanity check, not a tight statistical claim.
    #[test]
    fn prop_small_differences_peel_within_budget(
        seed in any::<u64>(),
        disjoint in prop::collection::hash_set(0u64..1_000_000, 1..20),
    ) {
        let n = 200;
        let mut a = Iblt::new(16, 4, 0.4, n, seed).unwrap();
        let mut b = Iblt::new(16, 4, 0.4, n, seed).unwrap();

        for i in 0..50u64 {
            a.insert(&pack_kmer(16, i)).unwrap();
            b.insert(&pack_kmer(16, i)).unwrap();
        }
        for (i, &v) in disjoint.iter().enumerate() {
            if i % 2 == 0 {
                a.insert(&pack_kmer(16, v)).unwrap();
            } else {
                b.insert(&pack_kmer(16, v)).unwrap();
            }
        }

        a.subtract(&b).unwrap();
        let (_, diff) = a.list().unwrap();
        prop_assert!(diff.total() <= disjoint.len());
    }
}
