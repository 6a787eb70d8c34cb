//! Delta insensitivity: the smallest width and a width that makes every edge
//! light produce the same distances.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::DeltaSteppingBuilder;

use super::types::SsspFixture;

pub(super) fn run_delta_insensitivity_property(fixture: &SsspFixture) -> TestCaseResult {
    let wide = fixture.max_weight().saturating_add(1);
    let mut outputs = Vec::with_capacity(2);
    for delta in [1, wide] {
        let engine = DeltaSteppingBuilder::new()
            .with_delta(delta)
            .with_threads(2)
            .build()
            .map_err(|error| TestCaseError::fail(format!("build failed: {error}")))?;
        let (paths, stats) = engine
            .run_with_stats(&fixture.graph, fixture.source)
            .map_err(|error| {
                TestCaseError::fail(format!(
                    "run failed: {error} (delta={delta}, {})",
                    fixture.describe()
                ))
            })?;
        if delta == wide && stats.heavy_relaxations() != 0 {
            return Err(TestCaseError::fail(format!(
                "width {wide} still relaxed {} heavy edges ({})",
                stats.heavy_relaxations(),
                fixture.describe(),
            )));
        }
        outputs.push(paths);
    }

    if outputs[0] != outputs[1] {
        return Err(TestCaseError::fail(format!(
            "delta=1 gave {:?} but delta={wide} gave {:?} ({})",
            outputs[0].distances(),
            outputs[1].distances(),
            fixture.describe(),
        )));
    }
    Ok(())
}
