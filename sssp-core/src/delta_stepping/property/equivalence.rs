//! Oracle equivalence: Delta-Stepping agrees with sequential Dijkstra for
//! every bucket width and worker count.

use std::num::NonZeroU64;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DeltaSteppingBuilder, dijkstra};

use super::types::SsspFixture;

const THREAD_COUNTS: [usize; 3] = [1, 2, 4];

/// Bucket widths exercised for a fixture: unit width, roughly half the
/// heaviest edge, one past the heaviest edge (all edges light) and an
/// extreme width.
pub(super) fn candidate_deltas(fixture: &SsspFixture) -> Vec<NonZeroU64> {
    let max_weight = fixture.max_weight();
    let mut deltas: Vec<NonZeroU64> = [
        1,
        max_weight / 2,
        max_weight.saturating_add(1),
        u64::MAX / 2,
    ]
    .into_iter()
    .filter_map(NonZeroU64::new)
    .collect();
    deltas.sort_unstable();
    deltas.dedup();
    deltas
}

pub(super) fn run_oracle_equivalence_property(fixture: &SsspFixture) -> TestCaseResult {
    let oracle = dijkstra(&fixture.graph, fixture.source).map_err(|error| {
        TestCaseError::fail(format!("oracle failed: {error} ({})", fixture.describe()))
    })?;

    for delta in candidate_deltas(fixture) {
        for threads in THREAD_COUNTS {
            let engine = DeltaSteppingBuilder::new()
                .with_delta(delta.get())
                .with_threads(threads)
                .build()
                .map_err(|error| TestCaseError::fail(format!("build failed: {error}")))?;
            let paths = engine.run(&fixture.graph, fixture.source).map_err(|error| {
                TestCaseError::fail(format!(
                    "delta-stepping failed: {error} (delta={delta}, threads={threads}, {})",
                    fixture.describe(),
                ))
            })?;
            if paths.distances() != oracle.distances() {
                return Err(TestCaseError::fail(format!(
                    "distances diverged from oracle: parallel={:?}, oracle={:?} \
                     (delta={delta}, threads={threads}, {})",
                    paths.distances(),
                    oracle.distances(),
                    fixture.describe(),
                )));
            }
        }
    }
    Ok(())
}
