//! Uniform doubles in `[0, 1)` from raw generator bits.
//!
//! The fast path fills the 52-bit mantissa of a double in `[1, 2)` directly
//! from the generator's raw bits and subtracts 1.0: constant time, no
//! branches, no rejection. It applies when the generator produces 32- or
//! 64-bit words; any other width goes through the generic accumulate-and-divide
//! algorithm.

use rand_core::RngCore;

use crate::error::{Error, Result};

const MANTISSA_MASK: u64 = (1 << 52) - 1;
/// Bit pattern of 1.0: sign 0, biased exponent 1023, mantissa 0.
const ONE_BITS: u64 = 0x3ff0_0000_0000_0000;
/// Largest double strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;
const DOUBLE_DIGITS: u32 = f64::MANTISSA_DIGITS;

/// Map a raw word to `[0, 1)` using its low 52 bits as the mantissa.
///
/// Higher bits are ignored. Returns `0.0` only when the low 52 bits are zero;
/// the maximum is `1.0 - f64::EPSILON`.
#[inline]
pub fn canonical_from_bits(word: u64) -> f64 {
    f64::from_bits(ONE_BITS | (word & MANTISSA_MASK)) - 1.0
}

/// Draw one uniform double in `[0, 1)`.
///
/// Uses a single `next_u64`, i.e. two outputs of a 32-bit generator.
#[inline]
pub fn canonical<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    canonical_from_bits(rng.next_u64())
}

/// Uniform double from a generator whose raw outputs are `width` bits wide.
///
/// `draw` must return values in `[0, 2^width)`; higher bits are masked off.
/// 64-bit generators use one word and 32-bit generators two (low word first),
/// both through [`canonical_from_bits`]. Other widths fall back to
/// [`generic_canonical`].
pub fn canonical_from_words<F: FnMut() -> u64>(width: u32, mut draw: F) -> Result<f64> {
    match width {
        64 => Ok(canonical_from_bits(draw())),
        32 => {
            let lo = draw() & 0xffff_ffff;
            let hi = draw() & 0xffff_ffff;
            Ok(canonical_from_bits((hi << 32) | lo))
        }
        _ => generic_canonical(width, draw),
    }
}

/// Generic canonical generation for any raw width in `1..=64`.
///
/// Draws `ceil(53 / width)` words, accumulates them as base-`2^width` digits and
/// divides by the total range. A rounding result of exactly 1.0 is clamped to
/// the largest double below 1.0.
pub fn generic_canonical<F: FnMut() -> u64>(width: u32, mut draw: F) -> Result<f64> {
    if width == 0 || width > 64 {
        return Err(Error::InvalidWidth(width));
    }
    let mask = if width == 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    };
    let range = 2f64.powi(width as i32);
    let words = DOUBLE_DIGITS.div_ceil(width).max(1);

    let mut sum = 0.0f64;
    let mut scale = 1.0f64;
    for _ in 0..words {
        sum += (draw() & mask) as f64 * scale;
        scale *= range;
    }

    let r = sum / scale;
    Ok(if r >= 1.0 { BELOW_ONE } else { r })
}
