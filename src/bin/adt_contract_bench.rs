use adt_contract_bench::benches;
use adt_contract_bench::dataset;
use adt_contract_bench::harness::{BenchConfig, Profile};
use adt_contract_bench::schema::{ContractBenchReport, RunMeta};
use adt_contract_bench::trace::TraceWriter;
use adt_contract_bench::StructureFamily;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    Quick,
    Full,
}

impl From<ProfileArg> for Profile {
    fn from(v: ProfileArg) -> Self {
        match v {
            ProfileArg::Quick => Profile::Quick,
            ProfileArg::Full => Profile::Full,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stack/queue/priority-queue workload benchmarks (W1/W2/W3).
    Structures {
        /// Which structure family to benchmark.
        #[arg(long, value_enum, default_value_t = StructureFamily::All)]
        family: StructureFamily,
    },

    /// Array-vs-growable-array comparison over a numbers file.
    ArrayLab {
        /// Input file: one integer per line, blank lines skipped.
        #[arg(long, value_name = "FILE", default_value = "numbers.txt")]
        input: PathBuf,
    },

    /// Run both harnesses.
    Suite {
        #[arg(long, value_name = "FILE", default_value = "numbers.txt")]
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = StructureFamily::All)]
        family: StructureFamily,
    },

    /// Generate a deterministic numbers file for the array lab.
    GenerateNumbers {
        /// Number of integers to generate.
        #[arg(long, short = 'n', default_value_t = 100_000)]
        count: usize,

        /// Output path.
        #[arg(long, short = 'o', value_name = "FILE")]
        output: PathBuf,

        /// Random seed for deterministic generation.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Parser, Debug)]
#[command(name = "adt-contract-bench")]
#[command(about = "Deterministic data-structure contract benchmark runner (CSV trace + JSON report)")]
struct Args {
    #[arg(long, value_enum, default_value_t = ProfileArg::Quick, global = true)]
    profile: ProfileArg,

    #[arg(long, default_value_t = 42, global = true)]
    seed: u64,

    /// Where to write the per-trial CSV trace.
    #[arg(long, value_name = "FILE", default_value = "results.csv", global = true)]
    trace: PathBuf,

    /// Where to write the JSON report. If omitted, prints to stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

fn now_utc_rfc3339() -> String {
    // Avoid a chrono dependency; this is "good enough" for filenames + reports.
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn git_sha_short() -> Option<String> {
    // Best-effort: read from environment set by CI/build scripts.
    std::env::var("GIT_SHA")
        .ok()
        .or_else(|| std::env::var("GITHUB_SHA").ok())
        .map(|s| s.chars().take(12).collect())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let cfg = BenchConfig {
        profile: args.profile.into(),
        seed: args.seed,
    };

    let mut measurements = Vec::new();

    match &args.cmd {
        Command::Structures { family } => {
            let mut trace = TraceWriter::create(&args.trace)?;
            measurements.extend(benches::structures::run(&cfg, *family, &mut trace)?);
            trace.finish()?;
        }
        Command::ArrayLab { input } => {
            let mut trace = TraceWriter::create(&args.trace)?;
            measurements.extend(benches::arraylab::run(&cfg, input, &mut trace)?);
            trace.finish()?;
        }
        Command::Suite { input, family } => {
            let mut trace = TraceWriter::create(&args.trace)?;
            measurements.extend(benches::structures::run(&cfg, *family, &mut trace)?);
            measurements.extend(benches::arraylab::run(&cfg, input, &mut trace)?);
            trace.finish()?;
        }
        Command::GenerateNumbers {
            count,
            output,
            seed,
        } => {
            dataset::write_numbers(output, *count, *seed)?;
            eprintln!("wrote {count} numbers to {} (seed {seed})", output.display());

            // Skip the JSON report for generate-numbers.
            return Ok(());
        }
    }

    eprintln!("\ntrace written to {}", args.trace.display());

    let report = ContractBenchReport {
        run: RunMeta {
            schema_version: 1,
            bench_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: cfg.profile.as_str().to_string(),
            seed: cfg.seed,
            timestamp_utc: now_utc_rfc3339(),
            git_sha: git_sha_short(),
        },
        measurements,
    };

    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    if let Some(out) = args.out {
        fs::write(out, json)?;
    } else {
        println!("{json}");
    }

    Ok(())
}
