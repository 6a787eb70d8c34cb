//! Benchmark setup error type.
//!
//! Aggregates the failures that may arise while preparing benchmark graphs
//! and engines so that setup functions can propagate them with `?`.

use crate::graphs::SyntheticGraphError;
use sssp_core::SsspError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticGraphError),
    /// Building or running an engine failed.
    #[error("shortest-path engine failed: {0}")]
    Sssp(#[from] SsspError),
}
