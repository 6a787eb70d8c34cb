//! Input validation shared by the shortest-path engines.
//!
//! Every check runs before any distance is touched so that a rejected input
//! never yields a partial result.

use crate::{
    error::{Result, SsspError},
    graph::{Edge, Graph, VertexId},
    paths::{Distance, UNREACHABLE},
};

/// Checks that `graph` is non-empty, `source` exists, and every edge has a
/// non-negative weight and an in-range target.
pub(crate) fn validate_run_inputs(graph: &Graph, source: VertexId) -> Result<()> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(SsspError::EmptyGraph);
    }
    if source >= vertex_count {
        return Err(SsspError::SourceOutOfRange {
            vertex: source,
            vertex_count,
        });
    }

    for (tail, edge) in graph.edges() {
        if edge.weight() < 0 {
            return Err(SsspError::NegativeWeight {
                tail,
                head: edge.target(),
                weight: edge.weight(),
            });
        }
        if edge.target() >= vertex_count {
            return Err(SsspError::InvalidVertex {
                tail,
                head: edge.target(),
                vertex_count,
            });
        }
    }
    Ok(())
}

/// Returns the weight of a validated edge as an unsigned distance increment.
pub(crate) fn edge_length(tail: VertexId, edge: &Edge) -> Result<Distance> {
    Distance::try_from(edge.weight()).map_err(|_| SsspError::NegativeWeight {
        tail,
        head: edge.target(),
        weight: edge.weight(),
    })
}

/// Adds an edge length to a tentative distance, reserving [`UNREACHABLE`]
/// for the sentinel.
pub(crate) fn extend_distance(
    base: Distance,
    length: Distance,
    target: VertexId,
) -> Result<Distance> {
    base.checked_add(length)
        .filter(|candidate| *candidate != UNREACHABLE)
        .ok_or(SsspError::DistanceOverflow { vertex: target })
}
