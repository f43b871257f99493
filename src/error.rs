//! Crate error type.

use thiserror::Error;

/// Errors returned by the sampling and conversion routines.
///
/// The generator itself never fails; every variant here is a caller-side
/// precondition violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// More elements were requested than the source holds.
    #[error("sample: requested {requested} elements but the source only has {available}")]
    SampleTooLarge { requested: usize, available: usize },

    /// A raw generator width outside `1..=64` bits.
    #[error("canonical: generator width must be in 1..=64 bits (got {0})")]
    InvalidWidth(u32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
