// Ziggurat rejection sampler for the unit-rate exponential.
//
// Marsaglia & Tsang's layered method over the 256-layer partition shipped in
// `zig_tables.rs`. One signed 63-bit draw supplies both the layer index (its
// low 8 bits) and the horizontal position; the overwhelming majority of draws
// fast-accept inside a layer's rectangular core without touching `exp`. The
// tail beyond R falls back to inverse-CDF on a fresh (0,1) draw.
//
// The rejection loop is unbounded in principle but terminates with
// probability 1; it is integral to correctness, not a failure path.

use crate::random::Random;
use crate::zig_tables::{EF, EK, EW, R};

/// One signed 63-bit value from a raw draw.
#[expect(clippy::cast_possible_wrap)]
fn i63(u: u64) -> i64 {
    (u >> 1) as i64
}

/// Sample the unit-rate exponential. Scaling by the mean happens in
/// [`Random::next_exp`].
#[expect(clippy::cast_precision_loss)]
pub(crate) fn sample(rng: &mut Random) -> f64 {
    let a = i63(rng.next_u64());
    let b = (a & 255) as usize;
    if a <= EK[b] {
        // Fast path: inside the rectangular core of layer b.
        return a as f64 * EW[b];
    }
    sample_slow(a, b, rng)
}

/// Rejection loop for draws outside a layer's core.
#[expect(clippy::cast_precision_loss)]
fn sample_slow(mut a: i64, mut b: usize, rng: &mut Random) -> f64 {
    loop {
        if b == 0 {
            // Tail case: exponential beyond R via inverse CDF. The (0,1)
            // draw excludes zero, so the log is finite.
            return R - rng.next_f52().ln();
        }
        let x = a as f64 * EW[b];
        // Uniform interpolation between the layer's cumulative-density
        // bounds, accepted where it falls under the true density.
        if EF[b - 1] + rng.next_f52() * (EF[b] - EF[b - 1]) < (-x).exp() {
            return x;
        }
        a = i63(rng.next_u64());
        b = (a & 255) as usize;
        if a <= EK[b] {
            return a as f64 * EW[b];
        }
    }
}
