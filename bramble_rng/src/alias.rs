// O(1) categorical sampling via Vose's alias method.
//
// Construction turns an arbitrary vector of non-negative weights into two
// equal-length tables: `threshold[i]` (a probability cut line scaled to
// 2^32) and `alias[i]` (the index that absorbs slot i's excess mass). The
// weight vector is padded to the next power of two with zero weights so the
// query can pick a slot with a bit shift instead of a division.
//
// A query consumes one raw 64-bit draw: the top bits select a slot, the low
// 32 bits decide between the slot and its alias. The table is immutable
// after construction and freely shareable across threads; rebuild it when
// the weights change.

use serde::{Deserialize, Serialize};

/// Constant-time sampler over weighted categories.
///
/// ```
/// use bramble_rng::{AliasTable, Random};
///
/// let table = AliasTable::new(&[3.0, 1.0]);
/// let mut rng = Random::new();
/// rng.seed_u32(7);
/// let index = table.get(rng.next_u64()); // 0 with probability 3/4
/// assert!(index < 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasTable {
    /// Right-shift applied to a draw to select a slot: 64 - log2(size).
    shift: u32,
    /// Cut lines: slot i wins its own index when the low 32 bits of the
    /// draw fall below `threshold[i]`.
    threshold: Vec<u32>,
    /// Absorbing index per slot.
    alias: Vec<u32>,
}

/// Smallest power of two >= `x`, with its exponent. Never below 2, so even
/// degenerate inputs produce a valid shift.
fn round_up_pow2(x: usize) -> (usize, u32) {
    let mut y: usize = 2;
    let mut k: u32 = 1;
    while y < x {
        y *= 2;
        k += 1;
    }
    (y, k)
}

impl AliasTable {
    /// Build a table from a weight vector, copying it.
    pub fn new(weights: &[f64]) -> Self {
        let mut table = Self::default();
        table.create(weights);
        table
    }

    /// Rebuild this table from a weight vector, copying it.
    pub fn create(&mut self, weights: &[f64]) {
        let mut scratch = weights.to_vec();
        self.create_inplace(&mut scratch);
    }

    /// Rebuild this table from a weight vector, using the caller's vector
    /// as scratch space. On return the vector holds construction residue
    /// (it is resized to the padded table size), not the original weights.
    ///
    /// Negative weights violate the contract and produce an unspecified
    /// (but memory-safe) table. Panics if the vector is longer than the
    /// 32-bit index space.
    #[expect(clippy::cast_possible_truncation)]
    pub fn create_inplace(&mut self, weights: &mut Vec<f64>) {
        assert!(
            weights.len() <= u32::MAX as usize,
            "create_inplace: weight vector exceeds 32-bit index space"
        );
        let (size, bits) = round_up_pow2(weights.len());
        weights.resize(size, 0.0);
        self.threshold = vec![0; size];
        self.alias = vec![0; size];
        self.shift = 64 - bits;

        // d is the mean padded weight: the probability cut scale. Slots at
        // or above d are donors ("large"), below are receivers ("small").
        let d = weights.iter().sum::<f64>() / size as f64;

        // g: current large index. m: current small index. mm: the scan
        // cursor for the next unprocessed small index.
        let mut g = 0;
        while g < size && weights[g] < d {
            g += 1;
        }
        let mut m = 0;
        while m < size && weights[m] >= d {
            m += 1;
        }
        let mut mm = m + 1;

        while g < size && m < size {
            debug_assert!(weights[m] < d);
            self.threshold[m] = (4_294_967_296.0 / d * weights[m]) as u32;
            self.alias[m] = g as u32;
            // Donate m's shortfall out of g's weight.
            weights[g] = (weights[g] + weights[m]) - d;
            if weights[g] >= d || mm <= g {
                m = mm;
                while m < size && weights[m] >= d {
                    m += 1;
                }
                mm = m + 1;
            } else {
                m = g;
            }
            while g < size && weights[g] < d {
                g += 1;
            }
        }

        // Floating rounding can leave indices unassigned on either side;
        // finalize them as always-accept-self so every slot ends defined.
        if g < size {
            self.finalize_slot(g);
            for i in g + 1..size {
                if weights[i] >= d {
                    self.finalize_slot(i);
                }
            }
        }
        if m < size {
            self.finalize_slot(m);
            for i in mm..size {
                if weights[i] <= d {
                    self.finalize_slot(i);
                }
            }
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    fn finalize_slot(&mut self, i: usize) {
        self.threshold[i] = u32::MAX;
        self.alias[i] = i as u32;
    }

    /// Sample a category index from one raw 64-bit draw.
    ///
    /// The top bits (scaled by the table's shift) pick a slot; the low
    /// 32 bits of the same draw are reused as the accept/alias comparison —
    /// no second draw. Panics if the table was never constructed.
    #[expect(clippy::cast_possible_truncation)]
    pub fn get(&self, u: u64) -> u32 {
        let slot = (u >> self.shift) as usize;
        let x = u as u32;
        if x < self.threshold[slot] {
            slot as u32
        } else {
            self.alias[slot]
        }
    }

    /// Padded table size (a power of two, >= the input length).
    pub fn len(&self) -> usize {
        self.threshold.len()
    }

    /// True until the first `create`/`create_inplace` call.
    pub fn is_empty(&self) -> bool {
        self.threshold.is_empty()
    }

    /// The cut-line table, for consumer serialization and tests.
    pub fn threshold(&self) -> &[u32] {
        &self.threshold
    }

    /// The alias-index table, for consumer serialization and tests.
    pub fn alias(&self) -> &[u32] {
        &self.alias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_up_is_never_below_two() {
        assert_eq!(round_up_pow2(0), (2, 1));
        assert_eq!(round_up_pow2(1), (2, 1));
        assert_eq!(round_up_pow2(2), (2, 1));
        assert_eq!(round_up_pow2(3), (4, 2));
        assert_eq!(round_up_pow2(5), (8, 3));
        assert_eq!(round_up_pow2(8), (8, 3));
        assert_eq!(round_up_pow2(9), (16, 4));
    }

    /// Hand-checked construction for [3, 1]: size 2, d = 2. Slot 1 keeps
    /// its own index with probability 2^31/2^32 = 1/2 and aliases to 0
    /// otherwise; slot 0 always accepts itself.
    #[test]
    fn known_tables_for_three_one() {
        let table = AliasTable::new(&[3.0, 1.0]);
        assert_eq!(table.threshold(), &[u32::MAX, 0x8000_0000]);
        assert_eq!(table.alias(), &[0, 0]);
        assert_eq!(table.shift, 63);
    }

    #[test]
    fn uniform_weights_always_accept_self() {
        let table = AliasTable::new(&[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(table.threshold(), &[u32::MAX; 4]);
        assert_eq!(table.alias(), &[0, 1, 2, 3]);
    }

    #[test]
    fn length_five_pads_to_eight() {
        let table = AliasTable::new(&[1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(table.len(), 8);
        assert_eq!(table.shift, 61);
    }

    #[test]
    fn construction_is_idempotent() {
        let weights = [0.5, 2.25, 0.0, 1.75, 3.0, 0.125, 9.0];
        let a = AliasTable::new(&weights);
        let b = AliasTable::new(&weights);
        assert_eq!(a.threshold(), b.threshold());
        assert_eq!(a.alias(), b.alias());
    }

    #[test]
    fn create_matches_create_inplace() {
        let weights = [4.0, 0.5, 0.5, 1.0, 2.0];
        let a = AliasTable::new(&weights);
        let mut scratch = weights.to_vec();
        let mut b = AliasTable::default();
        b.create_inplace(&mut scratch);
        assert_eq!(a, b);
        // The scratch vector was consumed as workspace.
        assert_eq!(scratch.len(), 8);
    }

    #[test]
    fn every_slot_ends_defined() {
        // Awkward weights that force the rounding fill-in paths.
        let cases: &[&[f64]] = &[
            &[1.0],
            &[0.0, 0.0, 0.0],
            &[1e-12, 1.0, 1e12],
            &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7],
        ];
        for weights in cases {
            let table = AliasTable::new(weights);
            assert_eq!(table.threshold().len(), table.len());
            assert_eq!(table.alias().len(), table.len());
            for (i, &a) in table.alias().iter().enumerate() {
                assert!((a as usize) < table.len(), "slot {i} alias out of range");
            }
        }
    }

    #[test]
    fn zero_weight_padding_is_never_returned() {
        let table = AliasTable::new(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut rng = crate::Random::new();
        rng.seed_u32(31);
        for _ in 0..100_000 {
            let index = table.get(rng.next_u64());
            assert!(index < 5, "padding slot {index} was returned");
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let table = AliasTable::new(&[1.0, 2.0, 3.0]);
        let json = serde_json::to_string(&table).unwrap();
        let restored: AliasTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, restored);
        assert_eq!(table.get(12345), restored.get(12345));
    }
}
