//! Small built-in graphs with well-known shortest-path distances.
//!
//! Both graphs are undirected: every edge is stored in both directions.

use crate::graph::Graph;

/// The classic nine-vertex textbook graph.
///
/// Distances from vertex 0 are `[0, 4, 12, 19, 21, 11, 9, 8, 14]`.
///
/// # Examples
/// ```
/// use sssp_core::{dijkstra, samples::classic_nine_vertex};
///
/// let paths = dijkstra(&classic_nine_vertex(), 0)?;
/// assert_eq!(paths.distance(4), Some(21));
/// # Ok::<(), sssp_core::SsspError>(())
/// ```
#[must_use]
pub fn classic_nine_vertex() -> Graph {
    Graph::from_adjacency(vec![
        vec![(1, 4), (7, 8)],
        vec![(0, 4), (7, 11), (2, 8)],
        vec![(1, 8), (8, 2), (5, 4), (3, 7)],
        vec![(2, 7), (5, 14), (4, 9)],
        vec![(3, 9), (5, 10)],
        vec![(6, 2), (2, 4), (3, 14), (4, 10)],
        vec![(7, 1), (8, 6), (5, 2)],
        vec![(0, 8), (1, 11), (8, 7), (6, 1)],
        vec![(2, 2), (7, 7), (6, 6)],
    ])
}

/// A fifteen-vertex mesh with every vertex of degree two or three.
///
/// Distances from vertex 0 are
/// `[0, 6, 4, 3, 11, 10, 5, 7, 14, 18, 11, 10, 8, 10, 18]`.
#[must_use]
pub fn fifteen_vertex_mesh() -> Graph {
    Graph::from_adjacency(vec![
        vec![(1, 6), (2, 4), (3, 3)],
        vec![(0, 6), (4, 5), (5, 9)],
        vec![(0, 4), (5, 6), (6, 8)],
        vec![(0, 3), (6, 2), (7, 4)],
        vec![(1, 5), (8, 3), (9, 7)],
        vec![(1, 9), (2, 6), (10, 5)],
        vec![(2, 8), (3, 2), (11, 6)],
        vec![(3, 4), (11, 3), (12, 1)],
        vec![(4, 3), (9, 6), (13, 9)],
        vec![(4, 7), (8, 6), (14, 2)],
        vec![(5, 5), (11, 4), (12, 3)],
        vec![(6, 6), (7, 3), (10, 4)],
        vec![(7, 1), (10, 3), (13, 2)],
        vec![(8, 9), (12, 2), (14, 8)],
        vec![(9, 2), (13, 8)],
    ])
}
