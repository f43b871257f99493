//! PCG32 bit generator.
//!
//! A 64-bit linear congruential generator whose 32-bit outputs pass through the
//! XSH-RR permutation (O'Neill, 2014). Output is bit-compatible with the
//! reference `pcg32` (and with `rand_pcg::Lcg64Xsh32`).
//!
//! Beyond the usual draw/seed operations the generator can jump an arbitrary
//! number of steps forward or backward in O(log n) and recover the number of
//! steps separating two snapshots of the same stream.
//!
//! ## References
//!
//! - O'Neill (2014): *PCG: A Family of Simple Fast Space-Efficient Statistically
//!   Good Algorithms for Random Number Generation*.
//! - Brown (1994): *Random Number Generation with Arbitrary Strides*.

use rand_core::{impls, RngCore, SeedableRng};

/// LCG multiplier shared by every PCG32 instance.
pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Increment of the reference default stream.
pub const DEFAULT_INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Seed used by [`Pcg32::default`].
pub const DEFAULT_SEED: u64 = 0xcafe_f00d_d15e_a5e5;

// XSH-RR shift amounts, derived from the state and output widths.
const STATE_BITS: u32 = u64::BITS;
const OUTPUT_BITS: u32 = u32::BITS;
const SPARE_BITS: u32 = STATE_BITS - OUTPUT_BITS;
const OP_BITS: u32 = OUTPUT_BITS.trailing_zeros();
const ROTATE_SHIFT: u32 = STATE_BITS - OP_BITS;
const BOTTOM_SPARE: u32 = SPARE_BITS - OP_BITS;
const XSHIFT: u32 = (OP_BITS + OUTPUT_BITS) / 2;

/// PCG32 (XSH-RR, 64-bit state, 32-bit output).
///
/// The increment selects the stream and is always odd.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Pcg32 {
    /// Seed on the default stream.
    pub fn new(seed: u64) -> Self {
        Self::with_increment(seed, DEFAULT_INCREMENT)
    }

    /// Seed with an explicit increment. The low bit is forced to 1.
    pub fn with_increment(seed: u64, increment: u64) -> Self {
        let mut rng = Self {
            state: 0,
            increment: increment | 1,
        };
        rng.reseed(seed);
        rng
    }

    /// Seed with a reference-style stream id: `increment = (stream << 1) | 1`.
    ///
    /// `Pcg32::with_stream(42, 54)` reproduces the reference demo sequence.
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        Self::with_increment(seed, stream << 1)
    }

    /// Seed from a seed sequence: exactly two words are drawn, used as
    /// `(seed, increment)`.
    pub fn from_seed_sequence<S: RngCore + ?Sized>(seq: &mut S) -> Self {
        let seed = seq.next_u64();
        let increment = seq.next_u64();
        Self::with_increment(seed, increment)
    }

    /// Reseed on the default stream.
    pub fn seed(&mut self, seed: u64) {
        self.seed_with_increment(seed, DEFAULT_INCREMENT);
    }

    /// Reseed with an explicit increment. The low bit is forced to 1.
    pub fn seed_with_increment(&mut self, seed: u64, increment: u64) {
        self.increment = increment | 1;
        self.reseed(seed);
    }

    /// Reseed from a seed sequence (two words).
    pub fn seed_from_sequence<S: RngCore + ?Sized>(&mut self, seq: &mut S) {
        *self = Self::from_seed_sequence(seq);
    }

    /// Current 64-bit LCG state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Stream increment (always odd).
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Advance by `n` draws without producing them.
    pub fn discard(&mut self, n: u64) {
        self.state = lcg_jump(self.state, n, MULTIPLIER, self.increment);
    }

    /// Step back by `n` draws.
    pub fn backstep(&mut self, n: u64) {
        // Jumping 2^64 - n steps forward lands n steps back.
        self.discard(n.wrapping_neg());
    }

    /// Signed jump: forward for positive `delta`, backward for negative.
    pub fn advance(&mut self, delta: i64) {
        self.discard(delta as u64);
    }

    /// Number of forward steps that take `self` to `other`.
    ///
    /// Returns `None` if the two generators are on different streams.
    pub fn distance(&self, other: &Pcg32) -> Option<u64> {
        (self.increment == other.increment).then(|| self.distance_to_state(other.state))
    }

    /// Number of forward steps from the current state to `target`.
    pub fn distance_to_state(&self, target: u64) -> u64 {
        lcg_distance(self.state, target, MULTIPLIER, self.increment)
    }

    #[inline]
    fn reseed(&mut self, seed: u64) {
        self.state = seed.wrapping_add(self.increment);
        self.bump();
    }

    #[inline]
    fn bump(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }
}

/// XSH-RR: xorshift high bits, truncate, rotate by the top bits of the state.
#[inline]
fn output(state: u64) -> u32 {
    let rot = (state >> ROTATE_SHIFT) as u32;
    let mixed = state ^ (state >> XSHIFT);
    ((mixed >> BOTTOM_SPARE) as u32).rotate_right(rot)
}

/// Apply `delta` steps of `s <- mult * s + plus` by binary exponentiation.
fn lcg_jump(state: u64, mut delta: u64, mut cur_mult: u64, mut cur_plus: u64) -> u64 {
    let mut acc_mult = 1u64;
    let mut acc_plus = 0u64;
    while delta > 0 {
        if delta & 1 == 1 {
            acc_mult = acc_mult.wrapping_mul(cur_mult);
            acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
        }
        cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
        delta >>= 1;
    }
    acc_mult.wrapping_mul(state).wrapping_add(acc_plus)
}

/// Recover the step count between two states of the same LCG, one bit at a time.
///
/// Requires an odd `cur_plus` (full-period LCG), which every `Pcg32` has.
fn lcg_distance(mut from: u64, to: u64, mut cur_mult: u64, mut cur_plus: u64) -> u64 {
    let mut bit = 1u64;
    let mut distance = 0u64;
    while from != to {
        if (from & bit) != (to & bit) {
            from = from.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            distance |= bit;
        }
        debug_assert_eq!(from & bit, to & bit);
        bit <<= 1;
        cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
        cur_mult = cur_mult.wrapping_mul(cur_mult);
    }
    distance
}

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.bump();
        output(old)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for Pcg32 {
    /// Little-endian seed word followed by little-endian increment word.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let (lo, hi) = seed.split_at(8);
        let mut state = [0u8; 8];
        let mut increment = [0u8; 8];
        state.copy_from_slice(lo);
        increment.copy_from_slice(hi);
        Self::with_increment(u64::from_le_bytes(state), u64::from_le_bytes(increment))
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed)
    }
}
