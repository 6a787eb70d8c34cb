//! Unit tests for synthetic graph generators.

use super::{GridGraphConfig, RandomGraphConfig, SyntheticGraphError, grid_graph, random_graph};
use rstest::{fixture, rstest};
use sssp_core::dijkstra;

#[fixture]
fn random_config() -> RandomGraphConfig {
    RandomGraphConfig {
        vertex_count: 200,
        average_degree: 5,
        max_weight: 50,
        seed: 42,
    }
}

#[fixture]
fn grid_config() -> GridGraphConfig {
    GridGraphConfig {
        rows: 6,
        columns: 9,
        max_weight: 20,
        seed: 11,
    }
}

#[rstest]
fn random_graph_has_requested_shape(random_config: RandomGraphConfig) {
    let graph = random_graph(&random_config).expect("random generation should succeed");
    assert_eq!(graph.vertex_count(), 200);
    assert_eq!(graph.edge_count(), 1_000);
    assert!(
        graph
            .edges()
            .all(|(_, edge)| (1..=50).contains(&edge.weight()))
    );
}

#[rstest]
fn random_graph_is_reachable_from_vertex_zero(random_config: RandomGraphConfig) {
    let graph = random_graph(&random_config).expect("random generation should succeed");
    let paths = dijkstra(&graph, 0).expect("generated graph is valid");
    assert_eq!(paths.reachable_count(), graph.vertex_count());
}

#[rstest]
fn random_graph_is_deterministic(random_config: RandomGraphConfig) {
    let left = random_graph(&random_config).expect("first generation should succeed");
    let right = random_graph(&random_config).expect("second generation should succeed");
    assert_eq!(left, right);
}

#[rstest]
fn random_graph_with_unit_degree_is_a_path() {
    let graph = random_graph(&RandomGraphConfig {
        vertex_count: 10,
        average_degree: 1,
        max_weight: 3,
        seed: 1,
    })
    .expect("path generation should succeed");
    assert_eq!(graph.edge_count(), 10);
}

#[rstest]
fn grid_graph_has_mesh_edges(grid_config: GridGraphConfig) {
    let graph = grid_graph(&grid_config).expect("grid generation should succeed");
    assert_eq!(graph.vertex_count(), 54);
    // 6 * 8 horizontal plus 5 * 9 vertical pairs, each stored twice.
    assert_eq!(graph.edge_count(), 2 * (48 + 45));
    let paths = dijkstra(&graph, 0).expect("generated graph is valid");
    assert_eq!(paths.reachable_count(), 54);
}

#[rstest]
#[case::zero_vertices(0, 3, 10, "vertex count must be greater than zero")]
#[case::zero_degree(4, 0, 10, "average degree must be greater than zero")]
#[case::zero_weight(4, 3, 0, "maximum weight must be positive (got 0)")]
#[case::negative_weight(4, 3, -5, "maximum weight must be positive (got -5)")]
fn random_graph_rejects_degenerate_config(
    #[case] vertex_count: usize,
    #[case] average_degree: usize,
    #[case] max_weight: i64,
    #[case] message: &str,
) {
    let err = random_graph(&RandomGraphConfig {
        vertex_count,
        average_degree,
        max_weight,
        seed: 3,
    })
    .expect_err("degenerate configuration must fail");
    assert_eq!(err.to_string(), message);
}

#[rstest]
fn grid_graph_rejects_zero_columns(grid_config: GridGraphConfig) {
    let err = grid_graph(&GridGraphConfig {
        columns: 0,
        ..grid_config
    })
    .expect_err("zero columns must fail");
    assert!(matches!(
        err,
        SyntheticGraphError::ZeroDimension {
            dimension: "columns"
        }
    ));
}

#[rstest]
fn random_graph_reports_size_overflow() {
    let err = random_graph(&RandomGraphConfig {
        vertex_count: usize::MAX,
        average_degree: 2,
        max_weight: 1,
        seed: 0,
    })
    .expect_err("overflowing size must fail");
    assert!(matches!(err, SyntheticGraphError::Overflow));
}
