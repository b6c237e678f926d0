//! Array-vs-growable-array comparison driver.
//!
//! Loads the numbers file into a [`FixedArray`] and a `Vec`, then times four
//! operation categories over both, a fixed number of trials each. Per-trial
//! setup (cloning the loaded structure, pre-generating random-access
//! indices) happens outside the clock. This driver reports trial means, not
//! medians; that asymmetry with the structure driver is intentional.

use std::hint::black_box;
use std::io;
use std::path::Path;

use serde_json::json;

use crate::arraylab::FixedArray;
use crate::dataset;
use crate::harness::{mean_ms, ns_to_ms, time_section, BenchConfig};
use crate::schema::Measurement;
use crate::structures::Value;
use crate::trace::{TraceRow, TraceWriter};

use rand::Rng;

const OPERATIONS: [&str; 4] = ["random_access", "append", "insert_front", "remove_front"];

/// Lower mean wins; a tie goes to the fixed array.
pub fn winner(array_mean_ms: f64, list_mean_ms: f64) -> &'static str {
    if array_mean_ms <= list_mean_ms {
        "array"
    } else {
        "arraylist"
    }
}

fn run_category(
    structure: &'static str,
    operation: &'static str,
    trials: usize,
    ops_per_trial: u64,
    trace: &mut TraceWriter,
    mut trial_fn: impl FnMut() -> (u128, i64),
) -> io::Result<Measurement> {
    let mut times_ms = Vec::with_capacity(trials);
    let mut checksums = Vec::with_capacity(trials);

    for trial in 1..=trials {
        let (elapsed_ns, checksum) = trial_fn();
        let ms = ns_to_ms(elapsed_ns);
        trace.record(&TraceRow {
            structure,
            operation,
            trial,
            time_ms: ms,
            checksum,
        })?;
        times_ms.push(ms);
        checksums.push(checksum);
    }

    Ok(Measurement {
        name: format!("arraylab.{structure}.{operation}"),
        unit: "ms/trial".to_string(),
        trials,
        ops_per_trial,
        aggregate: mean_ms(&times_ms),
        extra: json!({
            "times_ms": times_ms,
            "checksums": checksums,
        }),
    })
}

pub fn run(
    cfg: &BenchConfig,
    input: &Path,
    trace: &mut TraceWriter,
) -> io::Result<Vec<Measurement>> {
    let numbers = dataset::load_numbers(input)?;
    if numbers.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: no numbers to benchmark", input.display()),
        ));
    }
    eprintln!("loaded {} numbers", numbers.len());

    let array = FixedArray::from_slice(&numbers);
    let list: Vec<Value> = numbers.clone();

    let trials = cfg.profile.array_trials();
    let k = cfg.profile.random_access_ops();
    let a = cfg.profile.append_ops();
    let f = cfg.profile.front_insert_ops();
    let r = cfg.profile.front_remove_ops();

    let mut out = Vec::new();

    // Random access: index generation is shared by both structures and never
    // timed.
    {
        let mut rng = cfg.rng();
        let indices: Vec<usize> = (0..k).map(|_| rng.gen_range(0..numbers.len())).collect();

        out.push(run_category(
            "array",
            "random_access",
            trials,
            k as u64,
            trace,
            || {
                time_section(|| {
                    let mut sum: i64 = 0;
                    for &idx in &indices {
                        sum = sum.wrapping_add(array.get(idx));
                    }
                    sum
                })
            },
        )?);

        out.push(run_category(
            "arraylist",
            "random_access",
            trials,
            k as u64,
            trace,
            || {
                time_section(|| {
                    let mut sum: i64 = 0;
                    for &idx in &indices {
                        sum = sum.wrapping_add(list[idx]);
                    }
                    sum
                })
            },
        )?);
    }

    // Append: the checksum covers only the newly appended region.
    {
        out.push(run_category("array", "append", trials, a as u64, trace, || {
            let mut src = array.clone();
            let old_len = src.len();
            let (ns, ()) = time_section(|| src.append_sequential(a));
            let chk: i64 = src.as_slice()[old_len..]
                .iter()
                .fold(0i64, |acc, &v| acc.wrapping_add(v));
            (ns, black_box(chk))
        })?);

        out.push(run_category(
            "arraylist",
            "append",
            trials,
            a as u64,
            trace,
            || {
                let mut copy = list.clone();
                let old_len = copy.len();
                let (ns, ()) = time_section(|| {
                    for i in 0..a {
                        copy.push(i as Value);
                    }
                });
                let chk: i64 = copy[old_len..]
                    .iter()
                    .fold(0i64, |acc, &v| acc.wrapping_add(v));
                (ns, black_box(chk))
            },
        )?);
    }

    // Insert at front: the fixed array reallocates and shifts on every single
    // insertion. The checksum is the final front element.
    {
        out.push(run_category(
            "array",
            "insert_front",
            trials,
            f as u64,
            trace,
            || {
                let mut src = array.clone();
                let (ns, ()) = time_section(|| {
                    for i in 0..f {
                        src.push_front(i as Value);
                    }
                });
                (ns, black_box(src.first().unwrap_or(0)))
            },
        )?);

        out.push(run_category(
            "arraylist",
            "insert_front",
            trials,
            f as u64,
            trace,
            || {
                let mut copy = list.clone();
                let (ns, ()) = time_section(|| {
                    for i in 0..f {
                        copy.insert(0, i as Value);
                    }
                });
                (ns, black_box(copy.first().copied().unwrap_or(0)))
            },
        )?);
    }

    // Remove from front: checksum is the surviving front element, or zero
    // once the structure drains empty.
    {
        out.push(run_category(
            "array",
            "remove_front",
            trials,
            r as u64,
            trace,
            || {
                let mut src = array.clone();
                let (ns, ()) = time_section(|| {
                    for _ in 0..r {
                        src.pop_front();
                    }
                });
                (ns, black_box(src.first().unwrap_or(0)))
            },
        )?);

        out.push(run_category(
            "arraylist",
            "remove_front",
            trials,
            r as u64,
            trace,
            || {
                let mut copy = list.clone();
                let (ns, ()) = time_section(|| {
                    for _ in 0..r {
                        if !copy.is_empty() {
                            copy.remove(0);
                        }
                    }
                });
                (ns, black_box(copy.first().copied().unwrap_or(0)))
            },
        )?);
    }

    // Console summary: mean per structure and the per-operation winner.
    for op in OPERATIONS {
        let array_mean = mean_for(&out, "array", op);
        let list_mean = mean_for(&out, "arraylist", op);
        eprintln!(
            "operation: {op:<15} array avg: {array_mean:8.2} ms  arraylist avg: {list_mean:8.2} ms  winner: {}",
            winner(array_mean, list_mean)
        );
    }

    Ok(out)
}

fn mean_for(measurements: &[Measurement], structure: &str, operation: &str) -> f64 {
    let name = format!("arraylab.{structure}.{operation}");
    measurements
        .iter()
        .find(|m| m.name == name)
        .map(|m| m.aggregate)
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Profile;
    use crate::trace::TRACE_HEADER;
    use tempfile::tempdir;

    #[test]
    fn winner_tie_goes_to_the_fixed_array() {
        assert_eq!(winner(1.0, 1.0), "array");
        assert_eq!(winner(0.5, 1.0), "array");
        assert_eq!(winner(2.0, 1.0), "arraylist");
    }

    #[test]
    fn driver_traces_every_trial_and_agrees_on_checksums() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("numbers.txt");
        std::fs::write(&input, "10\n20\n30\n").unwrap();
        let trace_path = dir.path().join("results.csv");

        let cfg = BenchConfig {
            profile: Profile::Quick,
            seed: 42,
        };
        let mut trace = TraceWriter::create(&trace_path).unwrap();
        let measurements = run(&cfg, &input, &mut trace).unwrap();
        trace.finish().unwrap();

        // 4 operations x 2 structures.
        assert_eq!(measurements.len(), 8);
        let trials = cfg.profile.array_trials();
        let contents = std::fs::read_to_string(&trace_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], TRACE_HEADER);
        assert_eq!(lines.len(), 1 + 8 * trials);

        // Identical inputs and identical index sequences: the random-access
        // and append checksums must match between the two structures.
        for op in ["random_access", "append"] {
            let a = measurements
                .iter()
                .find(|m| m.name == format!("arraylab.array.{op}"))
                .unwrap();
            let l = measurements
                .iter()
                .find(|m| m.name == format!("arraylab.arraylist.{op}"))
                .unwrap();
            assert_eq!(a.extra["checksums"], l.extra["checksums"], "{op}");
        }
    }

    #[test]
    fn empty_input_is_fatal_before_timing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("numbers.txt");
        std::fs::write(&input, "\n\n").unwrap();
        let trace_path = dir.path().join("results.csv");

        let cfg = BenchConfig {
            profile: Profile::Quick,
            seed: 42,
        };
        let mut trace = TraceWriter::create(&trace_path).unwrap();
        assert!(run(&cfg, &input, &mut trace).is_err());
    }
}
