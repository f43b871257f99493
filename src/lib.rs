//! `hiku`: deterministic draws.
//!
//! A small toolbox of reproducible randomness primitives: a PCG32 bit generator
//! with O(log n) jumps, sampling without replacement, and a few lazy
//! enumeration helpers. Every function that needs randomness takes the
//! generator explicitly; nothing here reaches for a global or thread-local RNG.
//!
//! Exposed modules:
//! - `pcg`: the PCG32 generator (seeding, streams, discard/backstep/distance).
//! - `sample`: rejection / partial Fisher–Yates / Algorithm S sampling + `choose`.
//! - `reservoir`: streaming sampling from iterators of unknown length.
//! - `canonical`: raw bits to `f64` in `[0, 1)`.
//! - `product`: Cartesian-product and simplex odometer iterators.

#![forbid(unsafe_code)]

pub mod canonical;
pub mod error;
pub mod pcg;
pub mod product;
pub mod reservoir;
pub mod sample;

pub use canonical::{canonical, canonical_from_bits, canonical_from_words, generic_canonical};
pub use error::{Error, Result};
pub use pcg::Pcg32;
pub use product::{CartesianProduct, Simplex};
pub use reservoir::{sample_iter, Reservoir};
pub use sample::{
    choose, choose_index, choose_iter, choose_mut, sample, sample_indices, sample_with,
    sample_with_thresholds, Strategy, Thresholds,
};
