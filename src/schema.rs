use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub profile: String,
    pub seed: u64,
    pub timestamp_utc: String,
    pub git_sha: Option<String>,
}

/// One aggregated (structure, operation) result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub unit: String,

    pub trials: usize,
    pub ops_per_trial: u64,

    /// Aggregate per the driver's policy: median ns/op for the structure
    /// workloads, mean ms/trial for the array lab.
    pub aggregate: f64,

    /// Per-trial detail (raw times, checksums, workload parameters).
    pub extra: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractBenchReport {
    pub run: RunMeta,
    pub measurements: Vec<Measurement>,
}
