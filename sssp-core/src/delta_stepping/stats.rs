//! Run statistics collected by the Delta-Stepping engine.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing the work performed by one Delta-Stepping run.
///
/// # Examples
/// ```
/// use sssp_core::{DeltaSteppingBuilder, Graph};
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(0, 1, 3)?;
/// let engine = DeltaSteppingBuilder::new().with_threads(1).build()?;
/// let (paths, stats) = engine.run_with_stats(&graph, 0)?;
/// assert_eq!(paths.distance(1), Some(3));
/// assert_eq!(stats.improvements(), 1);
/// assert_eq!(stats.heavy_relaxations(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    relaxations: u64,
    improvements: u64,
    light_relaxations: u64,
    heavy_relaxations: u64,
    buckets_processed: u64,
    light_rounds: u64,
    max_bucket_index: u64,
}

impl RunStats {
    /// Total relaxation attempts (light plus heavy).
    #[must_use]
    #[rustfmt::skip]
    pub fn relaxations(&self) -> u64 { self.relaxations }

    /// Relaxations that lowered a tentative distance.
    #[must_use]
    #[rustfmt::skip]
    pub fn improvements(&self) -> u64 { self.improvements }

    /// Relaxation attempts over edges with `weight <= delta`.
    #[must_use]
    #[rustfmt::skip]
    pub fn light_relaxations(&self) -> u64 { self.light_relaxations }

    /// Relaxation attempts over edges with `weight > delta`.
    #[must_use]
    #[rustfmt::skip]
    pub fn heavy_relaxations(&self) -> u64 { self.heavy_relaxations }

    /// Non-empty buckets that were fully processed.
    #[must_use]
    #[rustfmt::skip]
    pub fn buckets_processed(&self) -> u64 { self.buckets_processed }

    /// Light-edge sub-rounds summed over all buckets.
    #[must_use]
    #[rustfmt::skip]
    pub fn light_rounds(&self) -> u64 { self.light_rounds }

    /// Highest bucket index that was processed.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_bucket_index(&self) -> u64 { self.max_bucket_index }
}

/// Lock-free accumulators shared by the worker threads.
#[derive(Debug, Default)]
pub(super) struct StatsRecorder {
    light_relaxations: AtomicU64,
    heavy_relaxations: AtomicU64,
    improvements: AtomicU64,
    buckets_processed: AtomicU64,
    light_rounds: AtomicU64,
    max_bucket_index: AtomicU64,
}

impl StatsRecorder {
    pub(super) fn record_attempts(&self, light: u64, heavy: u64) {
        if light > 0 {
            self.light_relaxations.fetch_add(light, Ordering::Relaxed);
        }
        if heavy > 0 {
            self.heavy_relaxations.fetch_add(heavy, Ordering::Relaxed);
        }
    }

    pub(super) fn record_improvement(&self) {
        self.improvements.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_light_round(&self) {
        self.light_rounds.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_bucket(&self, index: u64) {
        self.buckets_processed.fetch_add(1, Ordering::Relaxed);
        self.max_bucket_index.fetch_max(index, Ordering::Relaxed);
    }

    pub(super) fn buckets_processed(&self) -> u64 {
        self.buckets_processed.load(Ordering::Relaxed)
    }

    pub(super) fn snapshot(&self) -> RunStats {
        let light_relaxations = self.light_relaxations.load(Ordering::Relaxed);
        let heavy_relaxations = self.heavy_relaxations.load(Ordering::Relaxed);
        RunStats {
            relaxations: light_relaxations.saturating_add(heavy_relaxations),
            improvements: self.improvements.load(Ordering::Relaxed),
            light_relaxations,
            heavy_relaxations,
            buckets_processed: self.buckets_processed.load(Ordering::Relaxed),
            light_rounds: self.light_rounds.load(Ordering::Relaxed),
            max_bucket_index: self.max_bucket_index.load(Ordering::Relaxed),
        }
    }
}

#[cfg(feature = "metrics")]
pub(super) fn emit_metrics(stats: &RunStats, elapsed: std::time::Duration) {
    metrics::counter!("sssp_relaxations_total").increment(stats.relaxations);
    metrics::counter!("sssp_improvements_total").increment(stats.improvements);
    metrics::counter!("sssp_buckets_processed_total").increment(stats.buckets_processed);
    metrics::histogram!("sssp_run_duration_seconds").record(elapsed.as_secs_f64());
}
