//! Determinism: repeated runs and differing worker counts yield identical
//! distance arrays.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DeltaSteppingBuilder, Distance};

use super::types::{DeterminismConfig, SsspFixture};

const THREAD_COUNTS: [usize; 4] = [1, 2, 4, 16];

pub(super) fn run_determinism_property(fixture: &SsspFixture, delta: u64) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let mut baseline: Option<Vec<Distance>> = None;

    for threads in THREAD_COUNTS {
        let engine = DeltaSteppingBuilder::new()
            .with_delta(delta)
            .with_threads(threads)
            .build()
            .map_err(|error| TestCaseError::fail(format!("build failed: {error}")))?;

        for run in 0..config.repetitions {
            let distances = engine
                .run(&fixture.graph, fixture.source)
                .map_err(|error| {
                    TestCaseError::fail(format!(
                        "run {run} failed: {error} (threads={threads}, {})",
                        fixture.describe(),
                    ))
                })?
                .into_distances();

            match &baseline {
                None => baseline = Some(distances),
                Some(expected) if *expected != distances => {
                    return Err(TestCaseError::fail(format!(
                        "run {run} with {threads} threads diverged: expected={expected:?}, \
                         got={distances:?} (delta={delta}, {})",
                        fixture.describe(),
                    )));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}
