// Ambient entropy gathering for automatic seeding.
//
// Collects cheap, low-quality entropy from the process environment — OS
// randomness, time, address-space layout, thread/process ids, a compile-time
// stamp — crushes each source to 32 bits, and feeds the lot through
// `SeedSeq` compression. None of the sources is trusted individually; the
// seed sequence mixes them. Callers that need reproducibility seed
// explicitly instead and never touch this module.
//
// Process-wide state, with an explicit lifecycle:
// - `OS_ENTROPY`: 32 bits of genuine OS entropy, initialized once on first
//   use (via `RandomState`, which std seeds from the operating system) and
//   never changed afterward.
// - `CALL_COUNTER`: bumped on every call with a relaxed atomic add. Relaxed
//   ordering means concurrent callers may observe reordered counts; that is
//   an accepted tradeoff — the counter only has to make successive calls
//   differ, it is not a correctness-critical sequence number.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::seed_seq::SeedSeq256;

static OS_ENTROPY: OnceLock<u32> = OnceLock::new();
static CALL_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Per-call counter increment. Odd, so successive calls walk the full
/// 32-bit cycle even if every other source repeats.
const COUNTER_INC: u32 = 0xedf1_9156;

/// Crush a 64-bit value to 32 well-mixed bits with a fixed multilinear hash
/// (same construction as `seed_seq.rs`, with its own constants).
#[expect(clippy::cast_possible_truncation)]
fn crush_to_32(value: u64) -> u32 {
    let mut result: u64 = 0x80e2_5f91_f5ba_47ea;
    result = result.wrapping_add(0x6db4_dd6c_7a89_963c_u64.wrapping_mul(value & 0xffff_ffff));
    result = result.wrapping_add(0xd35f_3cdd_31f4_9ad8_u64.wrapping_mul(value >> 32));
    result = result.wrapping_add(0xc327_5ada_1d5e_ff71);
    (result >> 32) as u32
}

/// FNV-1a over a byte string, usable in const context for the compile stamp.
const fn fnv32(mut hash: u32, bytes: &[u8]) -> u32 {
    let mut i = 0;
    while i < bytes.len() {
        hash = (hash ^ bytes[i] as u32).wrapping_mul(16_777_619);
        i += 1;
    }
    hash
}

/// Changes whenever the crate is rebuilt with a different version or source
/// path, differentiating seeds across builds.
const COMPILE_STAMP: u32 = fnv32(
    2_166_136_261,
    concat!(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), file!()).as_bytes(),
);

fn crush_time() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos() as u64 | (d.as_secs() << 32));
    crush_to_32(nanos)
}

fn crush_thread_id() -> u32 {
    let mut hasher = RandomState::new().build_hasher();
    std::thread::current().id().hash(&mut hasher);
    crush_to_32(hasher.finish())
}

/// Build a seed sequence from ambient process entropy.
///
/// Every call produces different material (the counter guarantees it even
/// within one clock tick). The result feeds the normal `SeedSeq` compression
/// entry point, so a test harness can substitute its own material through
/// the same interface.
pub fn auto_seed_seq() -> SeedSeq256 {
    let os_entropy = *OS_ENTROPY.get_or_init(|| {
        let mut hasher = RandomState::new().build_hasher();
        hasher.write_u32(0);
        crush_to_32(hasher.finish())
    });
    let counter = CALL_COUNTER
        .fetch_add(COUNTER_INC, Ordering::Relaxed)
        .wrapping_add(COUNTER_INC);

    // Address-space sources: a fresh heap allocation, a stack slot, and a
    // function address, all perturbed by ASLR.
    let heap_box = Box::new(0u32);
    let heap = crush_to_32(std::ptr::from_ref(&*heap_box) as u64);
    let stack = crush_to_32(std::ptr::from_ref(&heap_box) as u64);
    let func_ptr: fn() -> SeedSeq256 = auto_seed_seq;
    let func = crush_to_32(func_ptr as usize as u64);

    let material = [
        COMPILE_STAMP,
        os_entropy.wrapping_add(counter),
        heap,
        stack,
        crush_time(),
        func,
        crush_thread_id(),
        crush_to_32(u64::from(std::process::id())),
    ];
    SeedSeq256::new(&material)
}
