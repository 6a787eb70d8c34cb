//! Fixture and configuration types for Delta-Stepping property tests.

use crate::{Graph, VertexId};

/// Topology and weight profile of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Roughly two outgoing edges per vertex with small weights.
    Sparse,
    /// Edge probability 0.7 with weights up to 100.
    Dense,
    /// Mostly light edges with occasional weights far above `delta`.
    HeavyTailed,
    /// A large share of zero-weight edges, including zero-weight cycles.
    ZeroHeavy,
    /// Several components with no edges between them.
    Disconnected,
    /// Self-loops and parallel edges between the same pair of vertices.
    Multigraph,
}

/// Generated input for the Delta-Stepping properties.
#[derive(Clone, Debug)]
pub(super) struct SsspFixture {
    /// Directed graph under test.
    pub graph: Graph,
    /// Source vertex, always in range.
    pub source: VertexId,
    /// Shape used during generation, reported on failure.
    pub shape: GraphShape,
}

impl SsspFixture {
    /// Largest edge weight, or zero for an edgeless graph.
    pub(super) fn max_weight(&self) -> u64 {
        self.graph
            .max_weight()
            .and_then(|weight| u64::try_from(weight).ok())
            .unwrap_or(0)
    }

    /// Short context string appended to failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, vertices={}, edges={}, source={}",
            self.shape,
            self.graph.vertex_count(),
            self.graph.edge_count(),
            self.source,
        )
    }
}

/// Configuration for the determinism property.
pub(super) struct DeterminismConfig {
    /// Number of runs per thread count.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Reads `SSSP_PBT_DETERMINISM_REPS`, defaulting to 3.
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("SSSP_PBT_DETERMINISM_REPS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .filter(|reps: &usize| *reps > 0)
            .unwrap_or(3);
        Self { repetitions }
    }
}
