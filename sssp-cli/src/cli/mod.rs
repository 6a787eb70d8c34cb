//! Command-line interface for the shortest-path engines.
//!
//! The `run` command loads a graph from an edge-list file or one of the
//! built-in samples, computes distances from a source vertex with either
//! Delta-Stepping or Dijkstra, and renders a vertex/distance table.

mod commands;
mod samples;

pub use commands::{
    Algorithm, Cli, CliError, Command, ExecutionSummary, FileArgs, GraphInput, RunCommand,
    SampleArgs, render_summary, run_cli,
};
pub use samples::SampleGraph;
