//! Property-based tests for the Delta-Stepping engine.
//!
//! Checks the parallel engine against the sequential Dijkstra oracle across
//! bucket widths and worker counts, asserts that results do not depend on
//! thread interleaving or on `delta`, and verifies that tentative distances
//! only ever decrease.

mod determinism;
mod equivalence;
mod insensitivity;
mod monotonicity;
mod strategies;
mod types;
