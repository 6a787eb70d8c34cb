use sssp_core::{DeltaStepping, DeltaSteppingBuilder, Graph};

#[must_use]
pub fn engine(delta: u64, threads: usize) -> DeltaStepping {
    DeltaSteppingBuilder::new()
        .with_delta(delta)
        .with_threads(threads)
        .build()
        .expect("engine configuration is valid")
}

/// Directed line `0 -> 1 -> ... -> n-1` with unit weights.
#[must_use]
pub fn line(vertex_count: usize) -> Graph {
    let mut graph = Graph::new(vertex_count);
    for tail in 1..vertex_count {
        graph
            .add_edge(tail - 1, tail, 1)
            .expect("endpoints are in range");
    }
    graph
}
