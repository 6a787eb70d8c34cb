//! Monotonicity: every recorded improvement strictly lowers a distance and
//! the last improvement of a vertex is its final distance.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DeltaSteppingBuilder, Distance, UNREACHABLE, VertexId, test_utils::RecordingObserver};

use super::types::SsspFixture;

pub(super) fn run_monotonicity_property(fixture: &SsspFixture, threads: usize) -> TestCaseResult {
    let engine = DeltaSteppingBuilder::new()
        .with_delta(fixture.max_weight() / 3 + 1)
        .with_threads(threads)
        .build()
        .map_err(|error| TestCaseError::fail(format!("build failed: {error}")))?;
    let observer = RecordingObserver::default();
    let paths = engine
        .run_observed(&fixture.graph, fixture.source, &observer)
        .map_err(|error| {
            TestCaseError::fail(format!("run failed: {error} ({})", fixture.describe()))
        })?;

    let mut latest: HashMap<VertexId, Distance> = HashMap::new();
    for improvement in observer.improvements() {
        if improvement.next >= improvement.previous {
            return Err(TestCaseError::fail(format!(
                "non-decreasing update {improvement:?} ({})",
                fixture.describe()
            )));
        }
        let current = latest
            .get(&improvement.vertex)
            .copied()
            .unwrap_or(UNREACHABLE);
        if improvement.previous != current {
            return Err(TestCaseError::fail(format!(
                "update {improvement:?} does not start from last value {current} ({})",
                fixture.describe()
            )));
        }
        latest.insert(improvement.vertex, improvement.next);
    }

    for (vertex, distance) in paths.distances().iter().enumerate() {
        let expected = if vertex == fixture.source {
            0
        } else {
            latest.get(&vertex).copied().unwrap_or(UNREACHABLE)
        };
        if *distance != expected {
            return Err(TestCaseError::fail(format!(
                "vertex {vertex} ended at {distance}, last observed {expected} ({})",
                fixture.describe()
            )));
        }
    }
    Ok(())
}
