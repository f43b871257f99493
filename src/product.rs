//! Lazy combinatorial enumeration.
//!
//! Both iterators own their position explicitly (an odometer), so they are
//! finite, lazy, and restartable: cloning an iterator snapshots its position.

use std::iter::FusedIterator;

/// Every index tuple of a Cartesian product of axes.
///
/// Tuples are produced as a mixed-radix counter with the last axis moving
/// fastest. A zero-sized axis makes the product empty; zero axes yield exactly
/// one empty tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartesianProduct {
    sizes: Vec<usize>,
    counter: Option<Vec<usize>>,
    remaining: usize,
}

impl CartesianProduct {
    pub fn new(sizes: impl Into<Vec<usize>>) -> Self {
        let sizes = sizes.into();
        let counter = (!sizes.contains(&0)).then(|| vec![0; sizes.len()]);
        // Saturates for products beyond usize::MAX.
        let remaining = if counter.is_some() {
            sizes.iter().fold(1usize, |acc, &s| acc.saturating_mul(s))
        } else {
            0
        };
        Self {
            sizes,
            counter,
            remaining,
        }
    }

    /// Axis sizes.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Rewind to the first tuple.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.sizes));
    }
}

impl Iterator for CartesianProduct {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let counter = self.counter.as_mut()?;
        let out = counter.clone();

        let mut rolled_over = true;
        for (digit, &size) in counter.iter_mut().zip(&self.sizes).rev() {
            *digit += 1;
            if *digit < size {
                rolled_over = false;
                break;
            }
            *digit = 0;
        }
        if rolled_over {
            self.counter = None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CartesianProduct {}

impl FusedIterator for CartesianProduct {}

/// Lattice points of the discrete simplex: every `dims`-tuple of non-negative
/// integers summing to `total`, in lexicographic order.
///
/// `Simplex::new(3, 2)` yields `[0,0,2] [0,1,1] [0,2,0] [1,0,1] [1,1,0] [2,0,0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simplex {
    dims: usize,
    total: usize,
    point: Option<Vec<usize>>,
    remaining: usize,
}

impl Simplex {
    pub fn new(dims: usize, total: usize) -> Self {
        let point = match dims {
            0 => (total == 0).then(Vec::new),
            _ => {
                let mut p = vec![0; dims];
                p[dims - 1] = total;
                Some(p)
            }
        };
        let remaining = match dims {
            0 => usize::from(total == 0),
            _ => binomial(total + dims - 1, dims - 1),
        };
        Self {
            dims,
            total,
            point,
            remaining,
        }
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Rewind to the first point.
    pub fn reset(&mut self) {
        *self = Self::new(self.dims, self.total);
    }
}

impl Iterator for Simplex {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let point = self.point.as_mut()?;
        let out = point.clone();

        // Find the rightmost coordinate with mass to its right, bump it, and
        // move the rest of that mass to the last coordinate.
        let last = point.len().saturating_sub(1);
        let mut tail = point.get(last).copied().unwrap_or(0);
        let mut advanced = false;
        for i in (0..last).rev() {
            if tail > 0 {
                point[i] += 1;
                point[i + 1..].fill(0);
                point[last] = tail - 1;
                advanced = true;
                break;
            }
            tail += point[i];
        }
        if !advanced {
            self.point = None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Simplex {}

impl FusedIterator for Simplex {}

/// `C(n, r)`, saturating at `usize::MAX`.
fn binomial(n: usize, r: usize) -> usize {
    let r = r.min(n - r);
    let mut acc: u128 = 1;
    for i in 1..=r as u128 {
        // Exact at every step: acc * (n - r + i) is divisible by i.
        acc = acc * (n as u128 - r as u128 + i) / i;
        if acc > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    acc as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_odometer_order() {
        let got: Vec<_> = CartesianProduct::new([2, 3]).collect();
        assert_eq!(
            got,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2]
            ]
        );
    }

    #[test]
    fn product_edge_cases() {
        assert_eq!(CartesianProduct::new([3, 0, 2]).count(), 0);
        assert_eq!(
            CartesianProduct::new(Vec::new()).collect::<Vec<_>>(),
            vec![Vec::<usize>::new()]
        );
        assert_eq!(CartesianProduct::new([1, 1, 1]).count(), 1);
    }

    #[test]
    fn product_len_is_exact() {
        let mut it = CartesianProduct::new([4, 5, 6]);
        assert_eq!(it.len(), 120);
        it.next();
        assert_eq!(it.len(), 119);
        assert_eq!(it.count(), 119);
    }

    #[test]
    fn clone_snapshots_position() {
        let mut it = CartesianProduct::new([3, 3]);
        it.nth(4);
        let snapshot = it.clone();
        let rest: Vec<_> = it.collect();
        assert_eq!(snapshot.collect::<Vec<_>>(), rest);
        assert_eq!(rest.first(), Some(&vec![1, 2]));
    }

    #[test]
    fn product_reset_restarts() {
        let mut it = CartesianProduct::new([2, 2]);
        let first: Vec<_> = it.by_ref().collect();
        assert!(it.next().is_none());
        it.reset();
        assert_eq!(it.sizes(), &[2, 2]);
        assert_eq!(it.collect::<Vec<_>>(), first);
    }

    #[test]
    fn simplex_lexicographic() {
        let got: Vec<_> = Simplex::new(3, 2).collect();
        assert_eq!(
            got,
            vec![
                vec![0, 0, 2],
                vec![0, 1, 1],
                vec![0, 2, 0],
                vec![1, 0, 1],
                vec![1, 1, 0],
                vec![2, 0, 0]
            ]
        );
    }

    #[test]
    fn simplex_counts_and_sums() {
        for dims in 1..5 {
            for total in 0..6 {
                let it = Simplex::new(dims, total);
                let expected = binomial(total + dims - 1, dims - 1);
                assert_eq!(it.len(), expected);
                let points: Vec<_> = it.collect();
                assert_eq!(points.len(), expected, "dims={dims} total={total}");
                assert!(points.iter().all(|p| p.len() == dims));
                assert!(points.iter().all(|p| p.iter().sum::<usize>() == total));
                assert!(points.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn simplex_edge_cases() {
        assert_eq!(Simplex::new(0, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Simplex::new(0, 3).count(), 0);
        assert_eq!(Simplex::new(1, 5).collect::<Vec<_>>(), vec![vec![5]]);

        let mut it = Simplex::new(2, 1);
        assert_eq!(it.by_ref().count(), 2);
        it.reset();
        assert_eq!(it.next(), Some(vec![0, 1]));
        assert_eq!((it.dims(), it.total()), (2, 1));
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(10, 0), 1);
        assert_eq!(binomial(10, 10), 1);
        assert_eq!(binomial(52, 5), 2_598_960);
    }
}
