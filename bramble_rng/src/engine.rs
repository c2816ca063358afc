// 128-bit Lehmer-style multiplicative congruential generator.
//
// The state is a single odd `u128`; each step multiplies it by a fixed odd
// 64-bit constant (mod 2^128) and the draw returns the top 64 bits of the new
// state, discarding the statistically weaker low bits. The multiplicative
// step is only full-period over odd state, so the low bit is forced to 1 on
// every assignment.
//
// **Critical constraint: determinism.** Every method must produce identical
// output given the same prior state, regardless of platform, compiler
// version, or optimization level. Seed material is combined little-endian by
// explicit shifts (not by memory reinterpretation) so the mapping from seed
// to state is byte-order independent.

use serde::{Deserialize, Serialize};

/// Raw seed material for the engine: four 32-bit words covering the 128-bit
/// state. Word 0 lands in the low 32 bits of the state, word 3 in the high.
pub type SeedMaterial = [u32; 4];

/// Multiplier for the MCG step. A known-good odd 64-bit constant.
const MCG_MULT: u64 = 0xda94_2042_e4dd_58b5;

/// State used when no seed is supplied.
const DEFAULT_STATE: u128 = 0x9f57_c403_d06c_42fc;

/// Fast 128-bit MCG producing 64-bit outputs.
///
/// Each instance is exclusively owned by its caller; there is no internal
/// locking. Callers that want parallel streams give each thread its own
/// engine, either seeded independently or jumped apart with [`discard`].
///
/// [`discard`]: Lehmer64::discard
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lehmer64 {
    state: u128,
}

impl Lehmer64 {
    /// Create an engine from an explicit 128-bit state.
    ///
    /// The low bit of `state` is forced to 1.
    pub fn with_state(state: u128) -> Self {
        let mut engine = Self { state: 0 };
        engine.set_state(state);
        engine
    }

    /// Create an engine from raw seed material.
    pub fn from_seed_material(seed: SeedMaterial) -> Self {
        let mut engine = Self { state: 0 };
        engine.seed(seed);
        engine
    }

    /// Replace the state. The low bit is forced to 1; the multiplicative
    /// step is only full-period over odd state.
    pub fn set_state(&mut self, state: u128) {
        self.state = state | 1;
    }

    /// Current raw state.
    pub fn state(&self) -> u128 {
        self.state
    }

    /// Reinterpret seed material as a 128-bit state (little-endian word
    /// order) and store it.
    pub fn seed(&mut self, seed: SeedMaterial) {
        let mut state: u128 = 0;
        for (i, word) in seed.iter().enumerate() {
            state |= u128::from(*word) << (32 * i);
        }
        self.set_state(state);
    }

    /// Advance the state one step without producing output.
    pub fn advance(&mut self) {
        self.state = self.state.wrapping_mul(u128::from(MCG_MULT));
    }

    /// Advance `count` steps without producing output. Used to jump an
    /// engine forward, e.g. to separate per-thread streams.
    pub fn discard(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Advance and return the top 64 bits of the new state.
    #[expect(clippy::cast_possible_truncation)]
    pub fn next_u64(&mut self) -> u64 {
        self.advance();
        (self.state >> 64) as u64
    }
}

impl Default for Lehmer64 {
    fn default() -> Self {
        Self::with_state(DEFAULT_STATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_bit_is_always_forced_odd() {
        let engine = Lehmer64::with_state(0x1234_5678_0000_0000_0000_0000_0000_0000);
        assert_eq!(engine.state() & 1, 1);
        let mut engine = Lehmer64::with_state(7);
        assert_eq!(engine.state(), 7);
        engine.set_state(8);
        assert_eq!(engine.state(), 9);
    }

    #[test]
    fn determinism_same_state_same_output() {
        let mut a = Lehmer64::with_state(0xdead_beef);
        let mut b = Lehmer64::with_state(0xdead_beef);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    /// Known-answer test pinning the default-state sequence. Computed
    /// independently with 128-bit integer arithmetic. If this breaks,
    /// cross-version reproducibility has been violated.
    #[test]
    fn known_sequence_from_default_state() {
        let mut engine = Lehmer64::default();
        assert_eq!(engine.next_u64(), 0x880c_efbd_2d45_a339);
        assert_eq!(engine.next_u64(), 0x1e61_62d7_40f0_6f70);
        assert_eq!(engine.next_u64(), 0x477c_8e3e_5c3a_e0f0);
        assert_eq!(engine.next_u64(), 0xc329_937a_832f_5a76);
    }

    #[test]
    fn known_output_from_seed_material() {
        let mut engine = Lehmer64::from_seed_material([1, 2, 3, 4]);
        assert_eq!(engine.next_u64(), 0x2331_c39e_63c0_4aa5);
    }

    #[test]
    fn discard_matches_unreturned_draws() {
        let mut a = Lehmer64::default();
        let mut b = Lehmer64::default();
        for _ in 0..17 {
            a.next_u64();
        }
        b.discard(17);
        assert_eq!(a, b);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn equality_compares_raw_state() {
        let a = Lehmer64::with_state(101);
        let b = Lehmer64::with_state(101);
        let c = Lehmer64::with_state(103);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut engine = Lehmer64::from_seed_material([9, 8, 7, 6]);
        for _ in 0..100 {
            engine.next_u64();
        }
        let json = serde_json::to_string(&engine).unwrap();
        let mut restored: Lehmer64 = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(engine.next_u64(), restored.next_u64());
        }
    }
}
