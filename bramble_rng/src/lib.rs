// bramble_rng — deterministic pseudo-random numbers and discrete sampling.
//
// A fast 128-bit Lehmer-style engine with uniform, bounded, exponential, and
// weighted-categorical derivations on top. This is a hand-rolled
// implementation with no external RNG crates, chosen for portability and to
// guarantee identical output across all platforms given the same seed.
//
// Module overview:
// - `engine.rs`:      `Lehmer64`, the 128-bit multiplicative congruential
//                     generator; everything else draws from it.
// - `random.rs`:      `Random`, the public facade: bit slices, 32-bit
//                     halves, unit-interval doubles, and the zero-bias
//                     bounded-range draw (Lemire/O'Neill).
// - `seed_seq.rs`:    `SeedSeq`, finite-entropy seed expansion through a
//                     Weyl-driven multilinear hash.
// - `entropy.rs`:     `auto_seed_seq`, ambient process entropy for callers
//                     that do not need reproducibility.
// - `exponential.rs`: 256-layer ziggurat sampler for the exponential
//                     distribution.
// - `zig_tables.rs`:  the shipped ziggurat partition dataset.
// - `alias.rs`:       `AliasTable`, O(1) weighted-categorical sampling via
//                     Vose's method.
//
// Design decisions:
// - **Composition over inheritance.** `Random` holds its engine as a field
//   and forwards the constructors; the engine stays usable on its own.
// - **Fail fast on contract violations.** Zero ranges, non-positive means,
//   and oversized weight vectors assert instead of returning valid-looking
//   garbage. The steady-state draw path reports no errors at all.
// - **Single-owner engines.** No locking anywhere; parallel callers give
//   each thread its own seeded `Random`. The alias and ziggurat tables are
//   immutable after construction and freely shareable.
// - **No floating point in the engine or hashes.** Floats appear only in
//   the derivations that produce them, keeping the integer core portable
//   bit-for-bit.

pub mod alias;
pub mod engine;
pub mod entropy;
mod exponential;
pub mod random;
pub mod seed_seq;
mod zig_tables;

pub use alias::AliasTable;
pub use engine::{Lehmer64, SeedMaterial};
pub use entropy::auto_seed_seq;
pub use random::Random;
pub use seed_seq::{SeedSeq, SeedSeq256};

#[cfg(test)]
mod tests {
    use super::*;

    /// The full seeding pipeline: raw words -> compression -> expansion ->
    /// engine state, checked against an engine seeded with the expanded
    /// material directly.
    #[test]
    fn seed_seq_pipeline_matches_manual_expansion() {
        let ss = SeedSeq256::new(&[10, 20, 30]);
        let mut material: SeedMaterial = [0; 4];
        ss.generate(&mut material);

        let from_seq = Random::from_seed_seq(&ss);
        let from_material = Random::from_seed_material(material);
        assert_eq!(from_seq, from_material);
    }

    #[test]
    fn facade_and_engine_agree() {
        let mut facade = Random::from_seed_material([1, 2, 3, 4]);
        let mut engine = Lehmer64::from_seed_material([1, 2, 3, 4]);
        for _ in 0..100 {
            assert_eq!(facade.next_u64(), engine.next_u64());
        }
    }

    #[test]
    fn from_entropy_generators_are_distinct() {
        let mut a = Random::from_entropy();
        let mut b = Random::from_entropy();
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn alias_query_consumes_facade_draws() {
        let table = AliasTable::new(&[2.0, 5.0, 3.0]);
        let mut rng = Random::new();
        rng.seed_u32(12);
        for _ in 0..1000 {
            assert!(table.get(rng.next_u64()) < 3);
        }
    }
}
