//! Minimizer sampling: the smallest-hashing item in each sliding window.

use std::collections::VecDeque;

use crate::hash::mix64;

/// Yields, for each sliding window of `w` consecutive upstream items, the
/// item with the smallest hash under [`mix64`]; ties keep the leftmost
/// (earliest-seen) item. A window only slides once full, so the first
/// `w - 1` items never produce output on their own.
///
/// Implemented as a monotonic deque of `(index, hash, item)` triples so the
/// whole stream is scanned in amortized O(1) per item, rather than the
/// original source's fixed-size ring buffer with an explicit re-scan on
/// minimum eviction. The item is carried in the deque itself (not just its
/// index) so the sampler stays a lazy, forward-only adaptor over `inner`:
/// callers never need to buffer the upstream stream separately to recover
/// the selected values.
pub struct MinimizerSampler<I> {
    inner: I,
    w: u16,
    seed: u64,
    index: u64,
    deque: VecDeque<(u64, u64, u64)>, // (index, hash, item)
    last_emitted_index: Option<u64>,
}

impl<I> MinimizerSampler<I>
where
    I: Iterator<Item = u64>,
{
    /// Build a minimizer sampler over `inner` with window width `w`.
    ///
    /// # Panics
    /// Panics if `w == 0`.
    #[must_use]
    pub fn new(inner: I, w: u16, seed: u64) -> Self {
        assert!(w > 0, "window width must be greater than 0");
        Self {
            inner,
            w,
            seed,
            index: 0,
            deque: VecDeque::new(),
            last_emitted_index: None,
        }
    }
}

impl<I> Iterator for MinimizerSampler<I>
where
    I: Iterator<Item = u64>,
{
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        for item in self.inner.by_ref() {
            let h = mix64(self.seed, item, u64::MAX);
            let i = self.index;
            self.index += 1;

            while let Some(&(_, back_hash, _)) = self.deque.back() {
                if back_hash > h {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back((i, h, item));

            while let Some(&(front_idx, _, _)) = self.deque.front() {
                if front_idx + u64::from(self.w) <= i + 1 {
                    self.deque.pop_front();
                } else {
                    break;
                }
            }

            if i + 1 >= u64::from(self.w) {
                let &(min_idx, _, min_item) = self.deque.front().expect("window is non-empty");
                if self.last_emitted_index != Some(min_idx) {
                    self.last_emitted_index = Some(min_idx);
                    return Some(min_item);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_output_before_window_fills() {
        let items = vec![5u64, 3, 9];
        let out: Vec<u64> = MinimizerSampler::new(items.into_iter(), 4, 0).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn emits_the_window_minimum_by_hash() {
        // All hashes distinct; brute-force the expected minimizer per window
        // and compare against the sampler's output.
        let items = vec![5u64, 3, 9, 1, 7, 2];
        let w = 3usize;
        let seed = 0;

        let mut expected = Vec::new();
        let mut last = None;
        for window in items.windows(w) {
            let min_item = *window
                .iter()
                .min_by_key(|&&x| mix64(seed, x, u64::MAX))
                .unwrap();
            if last != Some(min_item) {
                expected.push(min_item);
                last = Some(min_item);
            }
        }

        let out: Vec<u64> = MinimizerSampler::new(items.into_iter(), w as u16, seed).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn deterministic_given_seed() {
        let items: Vec<u64> = (0..50).collect();
        let a: Vec<u64> = MinimizerSampler::new(items.iter().copied(), 5, 3).collect();
        let b: Vec<u64> = MinimizerSampler::new(items.iter().copied(), 5, 3).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn yields_items_not_indices() {
        // Use values far outside any plausible index range; if the sampler
        // ever regresses to returning positions, this would fail loudly.
        let items = vec![1_000_000u64, 999_999, 1_000_050, 999_980];
        let out: Vec<u64> = MinimizerSampler::new(items.iter().copied(), 2, 0).collect();
        assert!(out.iter().all(|v| items.contains(v)));
    }

    #[test]
    #[should_panic(expected = "window width")]
    fn rejects_zero_width() {
        let _ = MinimizerSampler::new(std::iter::empty::<u64>(), 0, 0);
    }
}
