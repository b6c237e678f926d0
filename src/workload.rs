//! Deterministic workload shaping.
//!
//! Every draw comes from a caller-owned `ChaCha8Rng` seeded from the run
//! configuration; the generator itself holds no state. For a fixed seed the
//! draw sequence is bit-for-bit identical across trials and across every
//! structure variant, which is what makes cross-variant timings comparable.
//!
//! Three shapes:
//! - W1 bulk fill-then-drain: sequential keys in, everything out.
//! - W2 mixed steady state: prefill, then a 60/35/5 insert/remove/peek mix.
//! - W3 skewed priorities (priority queues only): 90% of priorities cluster
//!   in a narrow low band, 10% land in a wide high band.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::harness::Profile;

/// Mixed-workload probability table, in percent. Rolls in `[0,60)` insert,
/// `[60,95)` remove, `[95,100)` peek. Fixed configuration for the whole run.
pub const MIX_INSERT_BELOW: u32 = 60;
pub const MIX_REMOVE_BELOW: u32 = 95;

/// W3 skew: rolls below this pick from the narrow low band.
pub const SKEW_LOW_BELOW: u32 = 90;
/// Narrow band is `[0, SKEW_LOW_SPAN)`.
pub const SKEW_LOW_SPAN: u32 = 11;
/// Wide band is `[SKEW_LOW_SPAN, SKEW_LOW_SPAN + SKEW_HIGH_SPAN)`.
pub const SKEW_HIGH_SPAN: u32 = 100_000;

/// Uniform priority bound for W1/W2 enqueues.
pub const UNIFORM_PRIORITY_SPAN: u32 = 100;

/// Immutable description of one run's operation counts.
#[derive(Clone, Copy, Debug)]
pub struct WorkloadSpec {
    pub warmup_ops: usize,
    pub measure_ops: usize,
    pub prefill: usize,
    pub trials: usize,
}

impl WorkloadSpec {
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            warmup_ops: profile.warmup_ops(),
            measure_ops: profile.measure_ops(),
            prefill: profile.prefill(),
            trials: profile.trials(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MixedOp {
    Insert,
    Remove,
    Peek,
}

/// Pure roll-to-operation mapping for the W2 mix.
pub fn op_for_roll(roll: u32) -> MixedOp {
    if roll < MIX_INSERT_BELOW {
        MixedOp::Insert
    } else if roll < MIX_REMOVE_BELOW {
        MixedOp::Remove
    } else {
        MixedOp::Peek
    }
}

/// Draw the next W2 operation type. Consumes exactly one draw.
pub fn draw_mixed_op(rng: &mut ChaCha8Rng) -> MixedOp {
    op_for_roll(rng.gen_range(0..100))
}

/// Uniform priority in `[0, 100)` for W1/W2 priority-queue enqueues.
pub fn draw_priority_uniform(rng: &mut ChaCha8Rng) -> u32 {
    rng.gen_range(0..UNIFORM_PRIORITY_SPAN)
}

/// Skewed priority for W3. Always consumes exactly two draws (roll, then
/// band value) so the stream position stays identical whichever band wins.
pub fn draw_priority_skewed(rng: &mut ChaCha8Rng) -> u32 {
    if rng.gen_range(0..100) < SKEW_LOW_BELOW {
        rng.gen_range(0..SKEW_LOW_SPAN)
    } else {
        SKEW_LOW_SPAN + rng.gen_range(0..SKEW_HIGH_SPAN)
    }
}
