//! The two hash families used by this crate.
//!
//! `h128` backs bucket placement and the redundancy code in the IBLT engine
//! (component C): it is a from-scratch 128-bit MurmurHash3 variant
//! (`MurmurHash3_x64_128`), hand-rolled with no external dependency since no
//! crate in reach implements this exact 128-bit variant.
//!
//! `mix64` backs the syncmer/minimizer sampler (component B) and is
//! required bit-for-bit identical across implementations: two parties
//! building IBLTs with different mixing functions produce incompatible
//! sketches.

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

/// `MurmurHash3_x64_128`, returning the pair `(h1, h2)` of 64-bit words.
///
/// `h1` is used as the bucket-index hash, `h2` as the redundancy code.
pub fn h128(data: &[u8], seed: u64) -> (u64, u64) {
    let len = data.len();
    let nblocks = len / 16;
    let mut h1 = seed;
    let mut h2 = seed;

    for i in 0..nblocks {
        let block = &data[i * 16..i * 16 + 16];
        let mut k1 = u64::from_le_bytes(block[0..8].try_into().unwrap());
        let mut k2 = u64::from_le_bytes(block[8..16].try_into().unwrap());

        k1 = k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1
            .rotate_left(27)
            .wrapping_add(h2)
            .wrapping_mul(5)
            .wrapping_add(0x52dc_e729);

        k2 = k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
        h2 ^= k2;
        h2 = h2
            .rotate_left(31)
            .wrapping_add(h1)
            .wrapping_mul(5)
            .wrapping_add(0x3849_5ab5);
    }

    let tail = &data[nblocks * 16..];
    let mut k1: u64 = 0;
    let mut k2: u64 = 0;

    if tail.len() > 8 {
        for i in (8..tail.len()).rev() {
            k2 ^= u64::from(tail[i]) << ((i - 8) * 8);
        }
        k2 = k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
        h2 ^= k2;
    }
    if !tail.is_empty() {
        for i in (0..tail.len().min(8)).rev() {
            k1 ^= u64::from(tail[i]) << (i * 8);
        }
        k1 = k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
        h1 ^= k1;
    }

    h1 ^= len as u64;
    h2 ^= len as u64;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

/// The syncmer/minimizer mixing hash, carried over verbatim (bit-for-bit)
/// from the original source's `hash64` so sketches built by independent
/// implementations of this sampler remain compatible.
///
/// `seed` provides independent trials if needed; `mask` restricts the
/// working width (e.g. `(1 << (2*k)) - 1` for a `k`-mer).
#[must_use]
pub fn mix64(seed: u64, key: u64, mask: u64) -> u64 {
    let mut key = key.wrapping_add(seed) & mask;
    key = (!key).wrapping_add(key << 21) & mask;
    key ^= key >> 24;
    key = (key.wrapping_add(key << 3).wrapping_add(key << 8)) & mask;
    key ^= key >> 14;
    key = (key.wrapping_add(key << 2).wrapping_add(key << 4)) & mask;
    key ^= key >> 28;
    (key.wrapping_add(key << 31)) & mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h128_is_deterministic() {
        let (a1, a2) = h128(b"ACGTACGT", 7);
        let (b1, b2) = h128(b"ACGTACGT", 7);
        assert_eq!((a1, a2), (b1, b2));
    }

    #[test]
    fn h128_differs_by_seed() {
        let (a1, _) = h128(b"ACGTACGT", 0);
        let (b1, _) = h128(b"ACGTACGT", 1);
        assert_ne!(a1, b1);
    }

    #[test]
    fn h128_handles_all_tail_lengths() {
        for len in 0..40 {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let _ = h128(&data, 42);
        }
    }

    // The mixing hash is pinned against fixed (seed, key) -> output vectors,
    // computed once from the algorithm above; any deviation from these
    // constants is a wire-compatibility defect, not a refactor, since two
    // independent sketch builders must derive byte-identical syncmer and
    // minimizer selections.
    #[test]
    fn mix64_fixed_vectors() {
        let mask = u64::MAX;
        assert_eq!(mix64(0, 0, mask), 0x77cf_a1ee_f01b_ca90);
        assert_eq!(mix64(42, 0x1122_3344_5566_7788, mask), 0xb3b8_e663_32ea_a6c4);
        assert_eq!(mix64(7, 123_456_789, mask), 0xe077_7d1e_18f0_f4f5);
    }

    #[test]
    fn mix64_respects_mask() {
        let mask = (1u64 << 8) - 1;
        let out = mix64(42, 0xFFFF_FFFF_FFFF_FFFF, mask);
        assert_eq!(out & !mask, 0);
    }

    #[test]
    fn mix64_seed_changes_output() {
        let mask = u64::MAX;
        assert_ne!(mix64(1, 12345, mask), mix64(2, 12345, mask));
    }
}
