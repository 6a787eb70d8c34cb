//! Result types for shortest-path computations.

use crate::graph::VertexId;

/// Shortest-path weight from the source to a vertex.
pub type Distance = u64;

/// Sentinel stored for vertices that cannot be reached from the source.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Distances produced by a single-source shortest-path run.
///
/// # Examples
/// ```
/// use sssp_core::{ShortestPaths, UNREACHABLE};
///
/// let paths = ShortestPaths::new(0, vec![0, 7, UNREACHABLE]);
/// assert_eq!(paths.distance(1), Some(7));
/// assert_eq!(paths.distance(2), None);
/// assert_eq!(paths.reachable_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<Distance>,
}

impl ShortestPaths {
    /// Wraps a raw distance array computed from `source`.
    #[must_use]
    pub fn new(source: VertexId, distances: Vec<Distance>) -> Self {
        Self { source, distances }
    }

    /// Returns the source vertex of the run.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> VertexId { self.source }

    /// Returns the raw distance array, with [`UNREACHABLE`] for unreachable
    /// vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Distance] { &self.distances }

    /// Consumes the result and returns the raw distance array.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_distances(self) -> Vec<Distance> { self.distances }

    /// Returns the number of vertices covered by the result.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` when the result covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns the distance to `vertex`, or `None` when it is unreachable or
    /// out of range.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| *distance != UNREACHABLE)
    }

    /// Returns `true` when `vertex` is reachable from the source.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Counts vertices reachable from the source, including the source.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|distance| **distance != UNREACHABLE)
            .count()
    }

    /// Iterates over `(vertex, distance)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Option<Distance>)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(vertex, distance)| (vertex, (*distance != UNREACHABLE).then_some(*distance)))
    }
}
