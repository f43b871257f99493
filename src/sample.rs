//! Sampling without replacement.
//!
//! Draws `k` distinct positions uniformly from a slice of length `n`. All three
//! strategies produce every `k`-subset with equal probability; they differ in
//! cost and in the order of the returned elements:
//!
//! | strategy | chosen when | cost | output order |
//! |---|---|---|---|
//! | [`Strategy::Rejection`] | `100 * k < n` | O(k) expected, hash set | order of successful draws |
//! | [`Strategy::PartialShuffle`] | `5 * k < n` | O(n) clone + O(k) swaps | uniformly random |
//! | [`Strategy::Selection`] | otherwise | O(n) single pass | source order |
//!
//! Do not rely on a particular order unless the strategy is pinned with
//! [`sample_with`].
//!
//! ## References
//!
//! - Knuth, *TAOCP* Vol. 2, §3.4.2: Algorithm S (selection sampling) and
//!   Algorithm P (shuffling).
//! - Durstenfeld (1964): in-place Fisher–Yates.

use std::collections::HashSet;

use log::trace;
use rand::Rng;

use crate::error::{Error, Result};

/// Sampling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Draw uniform indices and reject duplicates with a hash set.
    Rejection,
    /// Clone the source and shuffle its first `k` positions.
    PartialShuffle,
    /// Knuth's Algorithm S: one streaming pass, keeps source order.
    Selection,
}

impl Strategy {
    /// Strategy the default [`Thresholds`] pick for `k` out of `n`.
    pub fn select(n: usize, k: usize) -> Self {
        Thresholds::default().select(n, k)
    }
}

/// Ratios at which the dispatcher switches strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Use [`Strategy::Rejection`] when `rejection_ratio * k < n`.
    pub rejection_ratio: usize,
    /// Use [`Strategy::PartialShuffle`] when `shuffle_ratio * k < n`.
    pub shuffle_ratio: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            rejection_ratio: 100,
            shuffle_ratio: 5,
        }
    }
}

impl Thresholds {
    pub fn select(&self, n: usize, k: usize) -> Strategy {
        if self.rejection_ratio.saturating_mul(k) < n {
            Strategy::Rejection
        } else if self.shuffle_ratio.saturating_mul(k) < n {
            Strategy::PartialShuffle
        } else {
            Strategy::Selection
        }
    }
}

#[inline]
fn check_size(k: usize, n: usize) -> Result<()> {
    if k > n {
        return Err(Error::SampleTooLarge {
            requested: k,
            available: n,
        });
    }
    Ok(())
}

/// Sample `k` elements of `source` without replacement.
///
/// The strategy is picked from the ratio `k / n` with the default [`Thresholds`].
///
/// # Errors
///
/// [`Error::SampleTooLarge`] if `k > source.len()`.
pub fn sample<T: Clone, R: Rng + ?Sized>(source: &[T], k: usize, rng: &mut R) -> Result<Vec<T>> {
    sample_with_thresholds(source, k, &Thresholds::default(), rng)
}

/// [`sample`] with caller-supplied switch-over ratios.
pub fn sample_with_thresholds<T: Clone, R: Rng + ?Sized>(
    source: &[T],
    k: usize,
    thresholds: &Thresholds,
    rng: &mut R,
) -> Result<Vec<T>> {
    check_size(k, source.len())?;
    let strategy = thresholds.select(source.len(), k);
    trace!(
        "sample: n={} k={} strategy={:?} thresholds={:?}",
        source.len(),
        k,
        strategy,
        thresholds
    );
    sample_with(strategy, source, k, rng)
}

/// Sample with an explicitly pinned strategy.
pub fn sample_with<T: Clone, R: Rng + ?Sized>(
    strategy: Strategy,
    source: &[T],
    k: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    match strategy {
        Strategy::Rejection => sample_rejection(source, k, rng),
        Strategy::PartialShuffle => sample_partial_shuffle(source, k, rng),
        Strategy::Selection => sample_selection(source, k, rng),
    }
}

/// Sample `k` distinct positions from `0..n`.
///
/// Uses the same dispatch and the same draws as [`sample`], so for a given
/// generator state `sample(source, k, rng)` equals these positions mapped
/// through `source`.
pub fn sample_indices<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
    check_size(k, n)?;
    let strategy = Strategy::select(n, k);
    trace!("sample_indices: n={n} k={k} strategy={strategy:?}");
    Ok(match strategy {
        Strategy::Rejection => rejection_indices(n, k, rng),
        Strategy::PartialShuffle => {
            let mut positions: Vec<usize> = (0..n).collect();
            partial_shuffle(&mut positions, k, rng);
            positions
        }
        Strategy::Selection => selection_indices(n, k, rng),
    })
}

/// Rejection sampling over a hash set of chosen positions.
///
/// Output order is the order in which distinct positions were drawn.
pub fn sample_rejection<T: Clone, R: Rng + ?Sized>(
    source: &[T],
    k: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    check_size(k, source.len())?;
    Ok(rejection_indices(source.len(), k, rng)
        .into_iter()
        .map(|i| source[i].clone())
        .collect())
}

/// Partial Fisher–Yates shuffle of a clone of `source`.
///
/// Output order is uniformly random.
pub fn sample_partial_shuffle<T: Clone, R: Rng + ?Sized>(
    source: &[T],
    k: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    check_size(k, source.len())?;
    let mut items = source.to_vec();
    partial_shuffle(&mut items, k, rng);
    Ok(items)
}

/// Knuth's Algorithm S (selection sampling).
///
/// Element `t` is kept with probability `(k - m) / (n - t)` where `m` is the
/// number already kept. The result is a subsequence of `source`: it is not
/// shuffled.
pub fn sample_selection<T: Clone, R: Rng + ?Sized>(
    source: &[T],
    k: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    check_size(k, source.len())?;
    Ok(selection_indices(source.len(), k, rng)
        .into_iter()
        .map(|i| source[i].clone())
        .collect())
}

fn rejection_indices<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    let mut chosen = HashSet::with_capacity(k);
    let mut out = Vec::with_capacity(k);
    while out.len() < k {
        let i = rng.random_range(0..n);
        if chosen.insert(i) {
            out.push(i);
        }
    }
    out
}

/// Shuffle the first `k` slots of `items` and drop the rest.
fn partial_shuffle<T, R: Rng + ?Sized>(items: &mut Vec<T>, k: usize, rng: &mut R) {
    let n = items.len();
    for i in 0..k {
        let j = rng.random_range(i..n);
        items.swap(i, j);
    }
    items.truncate(k);
}

fn selection_indices<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    let mut out = Vec::with_capacity(k);
    for t in 0..n {
        let needed = k - out.len();
        if needed == 0 {
            break;
        }
        // Bernoulli(needed / remaining) as an exact integer trial.
        if rng.random_range(0..n - t) < needed {
            out.push(t);
        }
    }
    out
}

/// Uniform position in `0..len`, or `None` if `len == 0`.
#[inline]
pub fn choose_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.random_range(0..len))
}

/// One uniformly chosen element of `source`.
pub fn choose<'a, T, R: Rng + ?Sized>(source: &'a [T], rng: &mut R) -> Option<&'a T> {
    choose_index(source.len(), rng).map(|i| &source[i])
}

/// Mutable variant of [`choose`].
pub fn choose_mut<'a, T, R: Rng + ?Sized>(source: &'a mut [T], rng: &mut R) -> Option<&'a mut T> {
    let i = choose_index(source.len(), rng)?;
    source.get_mut(i)
}

/// One uniformly chosen item of a sized iterator.
///
/// Draws a single position and advances the iterator to it.
pub fn choose_iter<I, R>(iter: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    R: Rng + ?Sized,
{
    let mut iter = iter.into_iter();
    let i = choose_index(iter.len(), rng)?;
    iter.nth(i)
}
