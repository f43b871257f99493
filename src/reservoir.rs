//! Reservoir sampling.
//!
//! Keeps a uniform sample of size `k` from a stream whose length is not known in
//! advance, using **Algorithm R** (Vitter, 1985): item number `i` (0-based)
//! replaces slot `j ~ Uniform[0, i]` whenever `j < k`.
//!
//! Use [`crate::sample`] when the source is already a slice; it is cheaper and
//! can keep source order.
//!
//! ## References
//!
//! - Vitter (1985): *Random Sampling with a Reservoir*.

use rand::Rng;

use crate::error::{Error, Result};

/// A reservoir that keeps at most `k` items of a stream.
#[derive(Debug, Clone)]
pub struct Reservoir<T> {
    k: usize,
    seen: usize,
    samples: Vec<T>,
}

impl<T> Reservoir<T> {
    /// Create a reservoir that keeps at most `k` items.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            seen: 0,
            samples: Vec::with_capacity(k),
        }
    }

    /// Offer one item from the stream.
    ///
    /// If `k == 0`, every item is discarded without drawing.
    #[inline]
    pub fn add<R: Rng + ?Sized>(&mut self, item: T, rng: &mut R) {
        let i = self.seen;
        self.seen += 1;

        if self.k == 0 {
            return;
        }

        if self.samples.len() < self.k {
            self.samples.push(item);
            return;
        }

        let j = rng.random_range(0..=i);
        if j < self.k {
            self.samples[j] = item;
        }
    }

    /// Current sample (size ≤ k).
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Number of items offered so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }
}

/// Sample `k` items without replacement from an iterator of unknown length.
///
/// # Errors
///
/// [`Error::SampleTooLarge`] if the iterator yields fewer than `k` items.
pub fn sample_iter<I, R>(iter: I, k: usize, rng: &mut R) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut reservoir = Reservoir::new(k);
    for item in iter {
        reservoir.add(item, rng);
    }
    if reservoir.seen() < k {
        return Err(Error::SampleTooLarge {
            requested: k,
            available: reservoir.seen(),
        });
    }
    Ok(reservoir.into_samples())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pcg::Pcg32;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn reservoir_keeps_k_items() {
        let mut rng = Pcg32::new(0);
        let mut s = Reservoir::new(5);
        for i in 0..100 {
            s.add(i, &mut rng);
        }
        assert_eq!(s.samples().len(), 5);
        assert_eq!(s.seen(), 100);
    }

    #[test]
    fn zero_capacity_draws_nothing() {
        let mut rng = Pcg32::new(0);
        let before = rng.clone();
        let mut s = Reservoir::new(0);
        for i in 0..10 {
            s.add(i, &mut rng);
        }
        assert!(s.samples().is_empty());
        assert_eq!(s.seen(), 10);
        assert_eq!(rng, before);
    }

    #[test]
    fn reservoir_distribution_uniform() {
        // Deterministic chi-squared smoke test: catches a biased replacement
        // index or an off-by-one in the stream count without being flaky.
        let n = 100;
        let k = 10;
        let trials = 5_000;
        let mut counts = vec![0; n];

        for t in 0..trials {
            let mut rng = ChaCha8Rng::seed_from_u64(t as u64);
            for item in sample_iter(0..n, k, &mut rng).expect("n >= k") {
                counts[item] += 1;
            }
        }

        let expected = trials as f64 * (k as f64 / n as f64);
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                (diff * diff) / expected
            })
            .sum();

        // df = n-1 = 99; conservative cutoff.
        assert!(
            chi2 < 250.0,
            "chi2 too large (chi2={chi2:.2}, expected~{}). counts={counts:?}",
            n - 1
        );
    }

    #[test]
    fn short_stream_is_an_error() {
        let mut rng = Pcg32::new(1);
        let err = sample_iter(0..3, 5, &mut rng).expect_err("stream too short");
        assert_eq!(
            err,
            Error::SampleTooLarge {
                requested: 5,
                available: 3
            }
        );
    }

    #[test]
    fn exact_length_stream_returns_everything_in_order() {
        let mut rng = Pcg32::new(1);
        let out = sample_iter("abcd".chars(), 4, &mut rng).expect("n == k");
        assert_eq!(out, vec!['a', 'b', 'c', 'd']);
    }
}
