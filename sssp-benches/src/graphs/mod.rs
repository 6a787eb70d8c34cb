//! Seeded synthetic graphs for benchmarking.
//!
//! Generators are deterministic for a given configuration so that results
//! stay comparable across runs and machines.

mod generation;

use rand::{SeedableRng, rngs::SmallRng};
use sssp_core::{Graph, GraphError, Weight};

/// Errors that may occur while generating benchmark graphs.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticGraphError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested average out-degree was zero.
    #[error("average degree must be greater than zero")]
    ZeroDegree,
    /// A grid dimension was zero.
    #[error("grid dimension `{dimension}` must be greater than zero")]
    ZeroDimension {
        /// Name of the zero dimension.
        dimension: &'static str,
    },
    /// The largest edge weight was not positive.
    #[error("maximum weight must be positive (got {max_weight})")]
    InvalidMaxWeight {
        /// The rejected bound.
        max_weight: Weight,
    },
    /// The requested size overflowed `usize`.
    #[error("requested graph size overflows usize")]
    Overflow,
    /// The graph rejected an edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Configuration for a sparse random directed graph.
///
/// Every vertex `i` has an edge to `i + 1`, so all vertices are reachable
/// from vertex 0; the remaining edges connect uniformly random endpoints.
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Average out-degree, including the spine edge.
    pub average_degree: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// Seed for the generator.
    pub seed: u64,
}

/// Configuration for an undirected four-neighbour grid.
#[derive(Clone, Debug)]
pub struct GridGraphConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// Seed for the generator.
    pub seed: u64,
}

/// Generates a random directed graph.
///
/// # Errors
/// Returns [`SyntheticGraphError`] when the configuration is degenerate.
///
/// # Examples
/// ```
/// use sssp_benches::graphs::{RandomGraphConfig, random_graph};
///
/// let graph = random_graph(&RandomGraphConfig {
///     vertex_count: 64,
///     average_degree: 4,
///     max_weight: 100,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 64);
/// assert_eq!(graph.edge_count(), 256);
/// # Ok::<(), sssp_benches::graphs::SyntheticGraphError>(())
/// ```
pub fn random_graph(config: &RandomGraphConfig) -> Result<Graph, SyntheticGraphError> {
    generation::validate_random_config(config)?;
    let extra = generation::extra_edge_count(config)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new(config.vertex_count);
    generation::add_spine(&mut graph, config.max_weight, &mut rng)?;
    generation::add_random_edges(&mut graph, extra, config.max_weight, &mut rng)?;
    Ok(graph)
}

/// Generates an undirected grid graph with `rows * columns` vertices.
///
/// # Errors
/// Returns [`SyntheticGraphError`] when the configuration is degenerate.
pub fn grid_graph(config: &GridGraphConfig) -> Result<Graph, SyntheticGraphError> {
    generation::validate_grid_config(config)?;
    let vertex_count = config
        .rows
        .checked_mul(config.columns)
        .ok_or(SyntheticGraphError::Overflow)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new(vertex_count);
    generation::add_grid_edges(&mut graph, config, &mut rng)?;
    Ok(graph)
}

#[cfg(test)]
mod tests;
