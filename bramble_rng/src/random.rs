// Uniform derivation layer: the public facade over the engine.
//
// `Random` owns a `Lehmer64` by composition and forwards its constructors,
// then layers pure derivations on top of the raw 64-bit draws: bit slices,
// 32-bit halves, unit-interval doubles, zero-bias bounded integers, and the
// exponential sampler. Nothing here mutates anything beyond advancing the
// owned engine.
//
// Precondition violations (`range == 0`, `mean <= 0.0`, `b` outside 1..=64)
// fail fast with an assert rather than returning a valid-looking value.

use serde::{Deserialize, Serialize};

use crate::engine::{Lehmer64, SeedMaterial};
use crate::exponential;
use crate::seed_seq::{SeedSeq, SeedSeq256};

/// Divisor mapping 53 bits onto [0, 1): 2^53.
const F53_DIVISOR: f64 = 9_007_199_254_740_992.0;

/// Exponent/sign bits of the IEEE double 1.0; ORing 52 random mantissa bits
/// into this yields a double uniformly spaced in [1, 2).
const F52_ONE_BITS: u64 = 0x3ff0_0000_0000_0000;

/// Deterministic random-value generator: a `Lehmer64` engine plus the
/// uniform, bounded, and exponential derivations on its output.
///
/// Each instance is exclusively owned; give every thread its own `Random`
/// (independently seeded, or `discard`-ed apart) for parallel generation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Random {
    engine: Lehmer64,
}

impl Random {
    /// Create a generator with the engine's fixed default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator from an explicit 128-bit engine state.
    pub fn with_state(state: u128) -> Self {
        Self {
            engine: Lehmer64::with_state(state),
        }
    }

    /// Create a generator from raw seed material.
    pub fn from_seed_material(seed: SeedMaterial) -> Self {
        Self {
            engine: Lehmer64::from_seed_material(seed),
        }
    }

    /// Create a generator from an already-built seed sequence.
    pub fn from_seed_seq<const N: usize>(ss: &SeedSeq<N>) -> Self {
        let mut rng = Self::new();
        rng.reseed(ss);
        rng
    }

    /// Create a generator seeded from ambient process entropy. Not
    /// reproducible by construction; use the explicit seeding entry points
    /// when a stable stream matters.
    pub fn from_entropy() -> Self {
        Self::from_seed_seq(&crate::entropy::auto_seed_seq())
    }

    /// Reseed from a single 32-bit value, expanded through the canonical
    /// N=8 seed sequence.
    pub fn seed_u32(&mut self, s: u32) {
        self.reseed(&SeedSeq256::new(&[s]));
    }

    /// Reseed from a seed sequence: expand it into engine seed material.
    pub fn reseed<const N: usize>(&mut self, ss: &SeedSeq<N>) {
        let mut seed: SeedMaterial = [0; 4];
        ss.generate(&mut seed);
        self.engine.seed(seed);
    }

    /// Reseed from raw seed material directly.
    pub fn seed(&mut self, seed: SeedMaterial) {
        self.engine.seed(seed);
    }

    /// Advance the engine `count` steps without producing output.
    pub fn discard(&mut self, count: usize) {
        self.engine.discard(count);
    }

    /// Raw engine state, for snapshotting and tests.
    pub fn state(&self) -> u128 {
        self.engine.state()
    }

    /// Uniform over [0, 2^64): one raw engine draw.
    pub fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    /// Uniform over [0, 2^b) from the top `b` bits of a draw.
    ///
    /// Panics if `b` is not in 1..=64. `next_bits(64)` equals `next_u64()`.
    pub fn next_bits(&mut self, b: u32) -> u64 {
        assert!(
            (1..=64).contains(&b),
            "next_bits: b must be in 1..=64, got {b}"
        );
        self.next_u64() >> (64 - b)
    }

    /// Uniform over [0, 2^32) from the top 32 bits of a draw.
    #[expect(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Two uniform 32-bit values from one draw: the (low, high) halves.
    /// One engine step yields both variates.
    #[expect(clippy::cast_possible_truncation)]
    pub fn next_u32_pair(&mut self) -> (u32, u32) {
        let u = self.next_u64();
        (u as u32, (u >> 32) as u32)
    }

    /// Uniform double in the open interval (0, 1) with 52 bits of precision.
    ///
    /// The top 52 bits of a draw are ORed into the mantissa of 1.0, giving a
    /// double uniformly spaced in [1, 2); subtracting `1.0 - 2^-53` lands in
    /// (0, 1) excluding both endpoints.
    pub fn next_f52(&mut self) -> f64 {
        let bits = (self.next_u64() >> 12) | F52_ONE_BITS;
        f64::from_bits(bits) - (1.0 - f64::EPSILON / 2.0)
    }

    /// Uniform double in [0, 1) with full 53-bit mantissa precision: the top
    /// 53 bits of a draw divided by 2^53. Zero is reachable, one is not.
    #[expect(clippy::cast_precision_loss)]
    pub fn next_f53(&mut self) -> f64 {
        ((self.next_u64() >> 11) as i64) as f64 / F53_DIVISOR
    }

    /// Uniform over [0, range) with zero bias.
    ///
    /// Lemire's multiply-shift method with O'Neill's near-divisionless
    /// threshold: take the full 128-bit product of a draw and `range`. If the
    /// low 64 bits clear `range` the high 64 bits are already unbiased (the
    /// common case). Otherwise compute `2^64 mod range` by conditional
    /// subtraction and redraw until the low half clears it. Expected draws
    /// are under 2 for every range.
    ///
    /// Panics if `range == 0`.
    #[expect(clippy::cast_possible_truncation)]
    pub fn next_u64_below(&mut self, range: u64) -> u64 {
        assert!(range > 0, "next_u64_below: range must be nonzero");
        let wide = u128::from(range);
        let mut m = u128::from(self.next_u64()) * wide;
        let mut low = m as u64;
        if low < range {
            // t = (2^64 - range) mod range, computed without a division in
            // the common case: at most one subtraction, then a modulo only
            // if still out of range.
            let mut t = range.wrapping_neg();
            if t >= range {
                t -= range;
                if t >= range {
                    t %= range;
                }
            }
            while low < t {
                m = u128::from(self.next_u64()) * wide;
                low = m as u64;
            }
        }
        (m >> 64) as u64
    }

    /// Exponential-distributed double with the given mean (mean = 1/rate),
    /// via the 256-layer ziggurat. Always non-negative.
    ///
    /// Panics if `mean <= 0.0`.
    pub fn next_exp(&mut self, mean: f64) -> f64 {
        assert!(mean > 0.0, "next_exp: mean must be positive, got {mean}");
        exponential::sample(self) * mean
    }
}
