//! Generator helper routines.

use rand::{Rng, rngs::SmallRng};
use sssp_core::{Graph, Weight};

use super::{GridGraphConfig, RandomGraphConfig, SyntheticGraphError};

pub(super) const fn validate_random_config(config: &RandomGraphConfig) -> Result<(), SyntheticGraphError> {
    if config.vertex_count == 0 {
        return Err(SyntheticGraphError::ZeroVertices);
    }
    if config.average_degree == 0 {
        return Err(SyntheticGraphError::ZeroDegree);
    }
    validate_max_weight(config.max_weight)
}

pub(super) const fn validate_grid_config(config: &GridGraphConfig) -> Result<(), SyntheticGraphError> {
    if config.rows == 0 {
        return Err(SyntheticGraphError::ZeroDimension { dimension: "rows" });
    }
    if config.columns == 0 {
        return Err(SyntheticGraphError::ZeroDimension {
            dimension: "columns",
        });
    }
    validate_max_weight(config.max_weight)
}

const fn validate_max_weight(max_weight: Weight) -> Result<(), SyntheticGraphError> {
    if max_weight <= 0 {
        return Err(SyntheticGraphError::InvalidMaxWeight { max_weight });
    }
    Ok(())
}

/// Total edges minus the `vertex_count - 1` spine edges.
pub(super) fn extra_edge_count(config: &RandomGraphConfig) -> Result<usize, SyntheticGraphError> {
    let total = config
        .vertex_count
        .checked_mul(config.average_degree)
        .ok_or(SyntheticGraphError::Overflow)?;
    Ok(total.saturating_sub(config.vertex_count.saturating_sub(1)))
}

pub(super) fn add_spine(
    graph: &mut Graph,
    max_weight: Weight,
    rng: &mut SmallRng,
) -> Result<(), SyntheticGraphError> {
    for tail in 1..graph.vertex_count() {
        graph.add_edge(tail - 1, tail, rng.gen_range(1..=max_weight))?;
    }
    Ok(())
}

pub(super) fn add_random_edges(
    graph: &mut Graph,
    count: usize,
    max_weight: Weight,
    rng: &mut SmallRng,
) -> Result<(), SyntheticGraphError> {
    let vertex_count = graph.vertex_count();
    for _ in 0..count {
        let tail = rng.gen_range(0..vertex_count);
        let head = rng.gen_range(0..vertex_count);
        graph.add_edge(tail, head, rng.gen_range(1..=max_weight))?;
    }
    Ok(())
}

pub(super) fn add_grid_edges(
    graph: &mut Graph,
    config: &GridGraphConfig,
    rng: &mut SmallRng,
) -> Result<(), SyntheticGraphError> {
    let mut vertex = 0_usize;
    for row in 0..config.rows {
        for column in 0..config.columns {
            if column + 1 < config.columns {
                graph.add_undirected_edge(vertex, vertex + 1, rng.gen_range(1..=config.max_weight))?;
            }
            if row + 1 < config.rows {
                graph.add_undirected_edge(
                    vertex,
                    vertex + config.columns,
                    rng.gen_range(1..=config.max_weight),
                )?;
            }
            vertex += 1;
        }
    }
    Ok(())
}
