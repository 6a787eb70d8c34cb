//! Sequential Dijkstra used as the reference for the parallel engine.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument};

use crate::{
    error::{Result, SsspError},
    graph::{Graph, VertexId},
    paths::{Distance, ShortestPaths, UNREACHABLE},
    validate::{edge_length, extend_distance, validate_run_inputs},
};

/// Computes shortest-path distances from `source` with a binary-heap
/// Dijkstra on the calling thread.
///
/// Inputs are validated exactly as [`crate::DeltaStepping::run`] does, so
/// both engines accept and reject the same graphs and their outputs can be
/// compared element-wise.
///
/// # Errors
/// Returns [`crate::SsspError::EmptyGraph`],
/// [`crate::SsspError::SourceOutOfRange`],
/// [`crate::SsspError::NegativeWeight`], [`crate::SsspError::InvalidVertex`]
/// or [`crate::SsspError::DistanceOverflow`].
///
/// # Examples
/// ```
/// use sssp_core::{Graph, dijkstra};
///
/// let graph = Graph::from_adjacency(vec![vec![(1, 4), (2, 1)], vec![], vec![(1, 2)]]);
/// let paths = dijkstra(&graph, 0)?;
/// assert_eq!(paths.distances(), &[0, 3, 1]);
/// # Ok::<(), sssp_core::SsspError>(())
/// ```
#[instrument(
    name = "sssp.dijkstra",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count(), source = source),
)]
pub fn dijkstra(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    validate_run_inputs(graph, source)?;

    let vertex_count = graph.vertex_count();
    let mut distances = vec![UNREACHABLE; vertex_count];
    if let Some(slot) = distances.get_mut(source) {
        *slot = 0;
    }
    let mut heap: BinaryHeap<Reverse<(Distance, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));
    let mut settled = 0_usize;

    while let Some(Reverse((distance, vertex))) = heap.pop() {
        if distances.get(vertex).is_none_or(|&best| distance > best) {
            continue;
        }
        settled = settled.saturating_add(1);
        for edge in graph.neighbors(vertex) {
            let head = edge.target();
            let candidate = extend_distance(distance, edge_length(vertex, edge)?, head)?;
            let best = distances.get_mut(head).ok_or(SsspError::InvalidVertex {
                tail: vertex,
                head,
                vertex_count,
            })?;
            if candidate < *best {
                *best = candidate;
                heap.push(Reverse((candidate, head)));
            }
        }
    }

    debug!(settled, "dijkstra completed");
    Ok(ShortestPaths::new(source, distances))
}
