//! Syncmer sampling: select k-mers whose minimum-hashing z-mer sits at a
//! configured offset.

use crate::hash::mix64;

/// Yields the subset of an upstream k-mer stream whose minimum-hashing
/// z-mer (length `s <= k`) sits at offset `o1` or `o2` within the k-mer.
/// `o1 == o2` selects closed syncmers; distinct offsets select open
/// syncmers.
pub struct SyncmerSampler<I> {
    inner: I,
    k: u8,
    s: u8,
    o1: u8,
    o2: u8,
    seed: u64,
    z_mask: u64,
}

impl<I> SyncmerSampler<I>
where
    I: Iterator<Item = u64>,
{
    /// Build a syncmer sampler over `inner`, a stream of `2k`-bit packed
    /// k-mers. `s` is the z-mer width; `o1`/`o2` are the accepted offsets
    /// of the minimum z-mer within the k-mer, counting from the
    /// most-significant (leftmost) base.
    ///
    /// # Panics
    /// Panics if `s == 0`, `s > k`, or either offset exceeds `k - s`.
    #[must_use]
    pub fn new(inner: I, k: u8, s: u8, o1: u8, o2: u8, seed: u64) -> Self {
        assert!(s > 0 && s <= k, "z-mer width must be in [1, k]");
        let window = k - s + 1;
        assert!(o1 < window && o2 < window, "offsets must be within [0, k-s]");
        Self {
            inner,
            k,
            s,
            o1,
            o2,
            seed,
            z_mask: (1u64 << (2 * s)) - 1,
        }
    }

    /// Returns the offset (from the most-significant base) at which the
    /// minimum-hashing z-mer of `kmer` sits; ties keep the leftmost
    /// (smallest-offset) occurrence.
    fn min_zmer_offset(&self, kmer: u64) -> u8 {
        let window = self.k - self.s + 1;
        let mut best_offset = 0u8;
        let mut best_hash = u64::MAX;
        for offset in 0..window {
            // offset 0 = leftmost z-mer = highest-order bits of the k-mer.
            let shift = 2 * (self.k - self.s - offset);
            let zmer = (kmer >> shift) & self.z_mask;
            let h = mix64(self.seed, zmer, self.z_mask);
            if h < best_hash {
                best_hash = h;
                best_offset = offset;
            }
        }
        best_offset
    }
}

impl<I> Iterator for SyncmerSampler<I>
where
    I: Iterator<Item = u64>,
{
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while let Some(kmer) = self.inner.next() {
            let offset = self.min_zmer_offset(kmer);
            if offset == self.o1 || offset == self.o2 {
                return Some(kmer);
            }
        }
        None
    }
}
