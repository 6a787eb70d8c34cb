//! Adjacency-list graph representation.
//!
//! The graph is directed: each vertex owns an ordered list of outgoing
//! [`Edge`]s. Undirected graphs are modelled by inserting both directions.
//! Weights are stored as signed integers so that invalid inputs can be
//! represented and rejected by the engines before a run starts.

use crate::error::GraphError;

/// Identifier of a vertex, dense in `0..vertex_count`.
pub type VertexId = usize;

/// Edge weight as supplied by callers. Engines reject negative values.
pub type Weight = i64;

/// A directed edge stored in the adjacency list of its tail vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    target: VertexId,
    weight: Weight,
}

impl Edge {
    /// Creates an edge pointing at `target` with the given `weight`.
    #[must_use]
    pub const fn new(target: VertexId, weight: Weight) -> Self {
        Self { target, weight }
    }

    /// Returns the head vertex of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// Immutable-during-run adjacency structure.
///
/// # Examples
/// ```
/// use sssp_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_undirected_edge(1, 2, 2)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.neighbors(1).len(), 1);
/// # Ok::<(), sssp_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds a graph from raw `(neighbor, weight)` adjacency lists.
    ///
    /// Lists are taken as-is: neither targets nor weights are checked here.
    /// Engines validate both before processing.
    ///
    /// # Examples
    /// ```
    /// use sssp_core::Graph;
    ///
    /// let graph = Graph::from_adjacency(vec![vec![(1, 2)], vec![(0, 2)]]);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    #[must_use]
    pub fn from_adjacency(lists: Vec<Vec<(VertexId, Weight)>>) -> Self {
        let adjacency = lists
            .into_iter()
            .map(|list| {
                list.into_iter()
                    .map(|(target, weight)| Edge::new(target, weight))
                    .collect()
            })
            .collect();
        Self { adjacency }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the total number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns the outgoing edges of `vertex`, or an empty slice when the
    /// vertex does not exist.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Iterates over every directed edge as `(tail, edge)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, &Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(tail, list)| list.iter().map(move |edge| (tail, edge)))
    }

    /// Returns the largest edge weight, or `None` for an edgeless graph.
    #[must_use]
    pub fn max_weight(&self) -> Option<Weight> {
        self.edges().map(|(_, edge)| edge.weight()).max()
    }

    /// Appends a directed edge `source -> target`.
    ///
    /// Multi-edges and self-loops are accepted.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not
    /// in `0..vertex_count`.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.check_vertex(target)?;
        let vertex_count = self.vertex_count();
        let list = self
            .adjacency
            .get_mut(source)
            .ok_or(GraphError::VertexOutOfRange {
                vertex: source,
                vertex_count,
            })?;
        list.push(Edge::new(target, weight));
        Ok(())
    }

    /// Appends edges in both directions between `left` and `right`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not
    /// in `0..vertex_count`. No edge is inserted on failure.
    pub fn add_undirected_edge(
        &mut self,
        left: VertexId,
        right: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.check_vertex(left)?;
        self.check_vertex(right)?;
        self.add_edge(left, right, weight)?;
        self.add_edge(right, left, weight)
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::source(3, 0)]
    #[case::target(0, 3)]
    fn add_edge_rejects_out_of_range_endpoints(#[case] source: usize, #[case] target: usize) {
        let mut graph = Graph::new(3);
        let err = graph
            .add_edge(source, target, 1)
            .expect_err("endpoint 3 does not exist");
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn undirected_edge_is_atomic_on_failure() {
        let mut graph = Graph::new(2);
        assert!(graph.add_undirected_edge(0, 5, 1).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn keeps_multi_edges_and_self_loops() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 3).expect("valid edge");
        graph.add_edge(0, 1, 1).expect("parallel edge");
        graph.add_edge(1, 1, 0).expect("self-loop");
        assert_eq!(graph.neighbors(0), &[Edge::new(1, 3), Edge::new(1, 1)]);
        assert_eq!(graph.neighbors(1), &[Edge::new(1, 0)]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn neighbors_of_missing_vertex_is_empty() {
        let graph = Graph::new(1);
        assert!(graph.neighbors(7).is_empty());
    }

    #[test]
    fn max_weight_tracks_largest_edge() {
        let graph = Graph::from_adjacency(vec![vec![(1, 4), (1, 9)], vec![(0, 2)]]);
        assert_eq!(graph.max_weight(), Some(9));
        assert_eq!(Graph::new(4).max_weight(), None);
    }

    #[test]
    fn edges_iterates_in_adjacency_order() {
        let graph = Graph::from_adjacency(vec![vec![(1, 1)], vec![], vec![(0, 5), (1, 6)]]);
        let edges: Vec<(usize, usize, i64)> = graph
            .edges()
            .map(|(tail, edge)| (tail, edge.target(), edge.weight()))
            .collect();
        assert_eq!(edges, vec![(0, 1, 1), (2, 0, 5), (2, 1, 6)]);
    }
}
