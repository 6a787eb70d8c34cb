//! Benchmark support crate for the shortest-path engines.
//!
//! Provides seeded synthetic graph generators and parameter types used by
//! the Criterion benchmarks that compare Delta-Stepping across bucket widths
//! and thread counts against the sequential Dijkstra baseline.

pub mod error;
pub mod graphs;
pub mod params;
