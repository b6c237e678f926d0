use std::hint::black_box;
use std::time::Instant;

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Copy, Debug)]
pub enum Profile {
    Quick,
    Full,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Quick => "quick",
            Profile::Full => "full",
        }
    }

    /// Operation count per untimed warmup pass (shorter than the measured phase).
    pub fn warmup_ops(&self) -> usize {
        match self {
            Profile::Quick => 2_000,
            Profile::Full => 15_000,
        }
    }

    /// Operation count per measured trial.
    pub fn measure_ops(&self) -> usize {
        match self {
            Profile::Quick => 10_000,
            Profile::Full => 60_000,
        }
    }

    /// Items pre-loaded before each steady-state trial.
    pub fn prefill(&self) -> usize {
        match self {
            Profile::Quick => 2_000,
            Profile::Full => 10_000,
        }
    }

    /// Trials per structure/workload pair. Odd, so the median is a real sample.
    pub fn trials(&self) -> usize {
        7
    }

    /// Random-access index count for the array lab (K).
    pub fn random_access_ops(&self) -> usize {
        match self {
            Profile::Quick => 20_000,
            Profile::Full => 200_000,
        }
    }

    /// Appended element count for the array lab (A).
    pub fn append_ops(&self) -> usize {
        match self {
            Profile::Quick => 20_000,
            Profile::Full => 200_000,
        }
    }

    /// Insert-at-front count for the array lab (F).
    pub fn front_insert_ops(&self) -> usize {
        match self {
            Profile::Quick => 2_000,
            Profile::Full => 20_000,
        }
    }

    /// Remove-from-front count for the array lab (R).
    pub fn front_remove_ops(&self) -> usize {
        match self {
            Profile::Quick => 2_000,
            Profile::Full => 20_000,
        }
    }

    /// Trials per array-lab operation category.
    pub fn array_trials(&self) -> usize {
        5
    }
}

#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub profile: Profile,
    pub seed: u64,
}

impl BenchConfig {
    /// Fresh deterministic stream from the run seed. Called at the start of
    /// every trial so each trial replays the identical draw sequence.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }
}

/// One measured trial: raw elapsed time plus the anti-elision checksum.
#[derive(Clone, Copy, Debug)]
pub struct Trial {
    pub elapsed_ns: u128,
    pub checksum: i64,
}

/// Time a closure on the monotonic clock, keeping its result observable.
pub fn time_section<T>(f: impl FnOnce() -> T) -> (u128, T) {
    let start = Instant::now();
    let out = black_box(f());
    (start.elapsed().as_nanos(), out)
}

/// Median by sorting a copy and taking the middle element. Trial counts are
/// always odd, so no interpolation is ever needed.
pub fn median_ns(samples: &[u64]) -> u64 {
    assert!(!samples.is_empty(), "median of empty sample set");
    let mut copy = samples.to_vec();
    copy.sort_unstable();
    copy[copy.len() / 2]
}

/// Arithmetic mean in milliseconds, used by the array-lab driver only. The
/// structure driver reports medians; keeping both policies separate is
/// intentional.
pub fn mean_ms(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len().max(1) as f64
}

pub fn ns_to_ms(ns: u128) -> f64 {
    ns as f64 / 1_000_000.0
}
