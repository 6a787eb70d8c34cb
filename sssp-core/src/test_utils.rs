//! Shared test utilities for `sssp-core`.

use std::sync::Mutex;

use proptest::test_runner::Config as ProptestConfig;
use sssp_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{
    delta_stepping::RelaxationObserver,
    graph::VertexId,
    paths::Distance,
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SSSP_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// A single observed distance improvement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Improvement {
    pub(crate) vertex: VertexId,
    pub(crate) previous: Distance,
    pub(crate) next: Distance,
}

/// [`RelaxationObserver`] that records every improvement it is told about.
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    improvements: Mutex<Vec<Improvement>>,
}

impl RecordingObserver {
    /// Returns the recorded improvements in notification order.
    pub(crate) fn improvements(&self) -> Vec<Improvement> {
        self.improvements
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl RelaxationObserver for RecordingObserver {
    fn improved(&self, vertex: VertexId, previous: Distance, next: Distance) {
        if let Ok(mut guard) = self.improvements.lock() {
            guard.push(Improvement {
                vertex,
                previous,
                next,
            });
        }
    }
}
