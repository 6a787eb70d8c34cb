//! Graph generators for Delta-Stepping property tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so a failing proptest
//! case can be replayed as an rstest case from its `(shape, seed)` pair.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Graph, Weight};

use super::types::{GraphShape, SsspFixture};

const MIN_VERTICES: usize = 1;
const MAX_VERTICES: usize = 48;
const DENSE_MAX_VERTICES: usize = 24;

/// Samples a shape, biased towards the cases that stress bucket movement.
pub(super) fn graph_shape_strategy() -> impl Strategy<Value = GraphShape> {
    prop_oneof![
        2 => Just(GraphShape::Sparse),
        2 => Just(GraphShape::Dense),
        3 => Just(GraphShape::HeavyTailed),
        3 => Just(GraphShape::ZeroHeavy),
        1 => Just(GraphShape::Disconnected),
        2 => Just(GraphShape::Multigraph),
    ]
}

pub(super) fn sssp_fixture_strategy() -> impl Strategy<Value = SsspFixture> {
    (graph_shape_strategy(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> SsspFixture {
    let graph = match shape {
        GraphShape::Sparse => random_graph(
            rng,
            MAX_VERTICES,
            |n| 2.0 / n as f64,
            |r| r.gen_range(1..=10),
        ),
        GraphShape::Dense => random_graph(
            rng,
            DENSE_MAX_VERTICES,
            |_| 0.7,
            |r| r.gen_range(0..=100),
        ),
        GraphShape::HeavyTailed => random_graph(
            rng,
            MAX_VERTICES,
            |n| 3.0 / n as f64,
            |r| {
                if r.gen_bool(0.15) {
                    r.gen_range(1_000..=1_000_000)
                } else {
                    r.gen_range(0..=5)
                }
            },
        ),
        GraphShape::ZeroHeavy => random_graph(
            rng,
            MAX_VERTICES,
            |n| 3.0 / n as f64,
            |r| if r.gen_bool(0.5) { 0 } else { r.gen_range(1..=4) },
        ),
        GraphShape::Disconnected => disconnected_graph(rng),
        GraphShape::Multigraph => multigraph(rng),
    };
    let source = rng.gen_range(0..graph.vertex_count());
    SsspFixture {
        graph,
        source,
        shape,
    }
}

fn random_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_probability: impl Fn(usize) -> f64,
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) -> Graph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability = edge_probability(vertex_count).clamp(0.0, 1.0);
    let mut lists = vec![Vec::new(); vertex_count];
    for (tail, list) in lists.iter_mut().enumerate() {
        for head in 0..vertex_count {
            if head != tail && rng.gen_bool(probability) {
                list.push((head, weight(rng)));
            }
        }
    }
    Graph::from_adjacency(lists)
}

fn disconnected_graph(rng: &mut SmallRng) -> Graph {
    let components = rng.gen_range(2..=4_usize);
    let per_component = rng.gen_range(2..=8_usize);
    let vertex_count = components * per_component;
    let mut lists = vec![Vec::new(); vertex_count];
    for component in 0..components {
        let base = component * per_component;
        for offset in 0..per_component {
            let tail = base + offset;
            let head = base + rng.gen_range(0..per_component);
            lists[tail].push((head, rng.gen_range(0..=20)));
            let next = base + (offset + 1) % per_component;
            lists[tail].push((next, rng.gen_range(1..=20)));
        }
    }
    Graph::from_adjacency(lists)
}

fn multigraph(rng: &mut SmallRng) -> Graph {
    let vertex_count = rng.gen_range(2..=16_usize);
    let mut lists = vec![Vec::new(); vertex_count];
    for _ in 0..vertex_count * 4 {
        let tail = rng.gen_range(0..vertex_count);
        let head = if rng.gen_bool(0.2) {
            tail
        } else {
            rng.gen_range(0..vertex_count)
        };
        let copies = rng.gen_range(1..=3);
        for _ in 0..copies {
            lists[tail].push((head, rng.gen_range(0..=12)));
        }
    }
    Graph::from_adjacency(lists)
}
