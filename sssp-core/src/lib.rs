//! Parallel single-source shortest paths.
//!
//! [`DeltaStepping`] computes exact distances on graphs with non-negative
//! integer weights using bucketed, multi-threaded relaxation; [`dijkstra`]
//! is the sequential reference with the same contract.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod delta_stepping;
mod dijkstra;
mod error;
mod graph;
mod paths;
pub mod samples;
mod validate;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::{DEFAULT_DELTA, DEFAULT_THREADS, DeltaSteppingBuilder},
    delta_stepping::{DeltaStepping, RunStats, compute_sssp},
    dijkstra::dijkstra,
    error::{GraphError, GraphErrorCode, Result, SsspError, SsspErrorCode},
    graph::{Edge, Graph, VertexId, Weight},
    paths::{Distance, ShortestPaths, UNREACHABLE},
};
