//! Benchmark parameter types.
//!
//! Groups the knobs of one benchmark case so that Criterion identifiers
//! stay short and consistent across groups.

use std::fmt;

/// Parameters for a Delta-Stepping benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct DeltaSteppingBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Bucket width.
    pub delta: u64,
    /// Worker threads.
    pub threads: usize,
}

impl fmt::Display for DeltaSteppingBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},delta={},t={}",
            self.vertex_count, self.delta, self.threads
        )
    }
}

/// Parameters for a sequential baseline run.
#[derive(Clone, Copy, Debug)]
pub struct BaselineBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
}

impl fmt::Display for BaselineBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}
