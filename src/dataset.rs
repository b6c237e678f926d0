//! Number-file loading and deterministic generation.
//!
//! The input format is one integer per line; blank lines (after trimming)
//! are skipped. Any other malformed line is fatal before timing begins.

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::structures::Value;

/// Generated values stay in this range; the benchmarks only care that the
/// data is deterministic and non-trivial.
const GENERATED_VALUE_SPAN: Value = 1_000_000;

/// Load a numbers file into a vector, preserving file order.
pub fn load_numbers<P: AsRef<Path>>(path: P) -> io::Result<Vec<Value>> {
    let file = File::open(&path)?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: Value = trimmed.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: not an integer: {trimmed:?}", lineno + 1),
            )
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Write `count` deterministic pseudorandom integers, one per line.
pub fn write_numbers<P: AsRef<Path>>(path: P, count: usize, seed: u64) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(64 * 1024, file);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..count {
        let value: Value = rng.gen_range(0..GENERATED_VALUE_SPAN);
        writeln!(writer, "{value}")?;
    }

    writer.flush()?;
    Ok(())
}
