//! Shared test utilities used across the sssp crates.

pub mod ci;
pub mod tracing;
