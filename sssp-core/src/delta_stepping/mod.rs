//! Parallel Delta-Stepping single-source shortest paths.
//!
//! Vertices are grouped into buckets of width `delta` by tentative distance.
//! Buckets are settled in increasing index order. Within a bucket the engine
//! repeatedly drains the bucket and relaxes the light edges (`weight <= delta`)
//! of the drained vertices in parallel until no vertex re-enters it; the heavy
//! edges (`weight > delta`) of every vertex drained from that bucket are then
//! relaxed in one parallel pass. Relaxations only ever land in the current or
//! a later bucket, so a bucket is never revisited.

mod buckets;
mod state;
mod stats;

#[cfg(test)]
mod property;

use std::{
    collections::BTreeSet,
    num::NonZeroU64,
    sync::Arc,
    time::{Duration, Instant},
};

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::{
    builder::DeltaSteppingBuilder,
    error::{Result, SsspError},
    graph::{Graph, VertexId},
    paths::ShortestPaths,
    validate::validate_run_inputs,
};

pub use self::stats::RunStats;
pub(crate) use self::state::{NoopObserver, RelaxationObserver};

use self::{
    buckets::BucketIndex,
    state::{EdgeClass, RelaxationState},
};

/// Configured Delta-Stepping engine owning a dedicated worker pool.
///
/// Construct instances through [`DeltaSteppingBuilder`]. Cloning is cheap and
/// shares the worker pool.
#[derive(Clone, Debug)]
pub struct DeltaStepping {
    delta: NonZeroU64,
    threads: usize,
    deadline: Option<Duration>,
    pool: Arc<rayon::ThreadPool>,
}

impl DeltaStepping {
    pub(crate) fn new(
        delta: NonZeroU64,
        threads: usize,
        deadline: Option<Duration>,
        pool: Arc<rayon::ThreadPool>,
    ) -> Self {
        Self {
            delta,
            threads,
            deadline,
            pool,
        }
    }

    /// Returns the bucket width.
    #[must_use]
    #[rustfmt::skip]
    pub fn delta(&self) -> NonZeroU64 { self.delta }

    /// Returns the configured number of worker threads.
    #[must_use]
    #[rustfmt::skip]
    pub fn threads(&self) -> usize { self.threads }

    /// Returns the configured deadline, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn deadline(&self) -> Option<Duration> { self.deadline }

    /// Returns the number of threads in the backing worker pool.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Computes shortest-path distances from `source` to every vertex.
    ///
    /// # Errors
    /// Returns [`SsspError::EmptyGraph`], [`SsspError::SourceOutOfRange`],
    /// [`SsspError::NegativeWeight`] or [`SsspError::InvalidVertex`] when the
    /// input is rejected before any bucket is processed,
    /// [`SsspError::DistanceOverflow`] when a path length exceeds the
    /// distance range, and [`SsspError::DeadlineExceeded`] when the
    /// configured deadline elapses.
    ///
    /// # Examples
    /// ```
    /// use sssp_core::{DeltaSteppingBuilder, Graph};
    ///
    /// let mut graph = Graph::new(3);
    /// graph.add_edge(0, 1, 2)?;
    /// graph.add_edge(1, 2, 2)?;
    /// graph.add_edge(0, 2, 5)?;
    /// let engine = DeltaSteppingBuilder::new().with_delta(2).build()?;
    /// let paths = engine.run(&graph, 0)?;
    /// assert_eq!(paths.distance(2), Some(4));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn run(&self, graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
        self.execute(graph, source, &NoopObserver)
            .map(|(paths, _)| paths)
    }

    /// Like [`Self::run`], additionally returning the work counters.
    ///
    /// # Errors
    /// Same as [`Self::run`].
    pub fn run_with_stats(
        &self,
        graph: &Graph,
        source: VertexId,
    ) -> Result<(ShortestPaths, RunStats)> {
        self.execute(graph, source, &NoopObserver)
    }

    /// Runs the engine, reporting every distance improvement to `observer`.
    pub(crate) fn run_observed<O: RelaxationObserver>(
        &self,
        graph: &Graph,
        source: VertexId,
        observer: &O,
    ) -> Result<ShortestPaths> {
        self.execute(graph, source, observer)
            .map(|(paths, _)| paths)
    }

    #[instrument(
        name = "sssp.run",
        err,
        skip(self, graph, observer),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            source = source,
            delta = self.delta.get(),
            threads = self.threads,
        ),
    )]
    fn execute<O: RelaxationObserver>(
        &self,
        graph: &Graph,
        source: VertexId,
        observer: &O,
    ) -> Result<(ShortestPaths, RunStats)> {
        validate_run_inputs(graph, source)?;

        let started = Instant::now();
        let state = RelaxationState::new(graph, self.delta, source, observer);
        self.settle_buckets(&state, started)?;

        let elapsed = started.elapsed();
        let stats = state.stats().snapshot();
        #[cfg(feature = "metrics")]
        stats::emit_metrics(&stats, elapsed);
        info!(
            relaxations = stats.relaxations(),
            improvements = stats.improvements(),
            buckets = stats.buckets_processed(),
            light_rounds = stats.light_rounds(),
            elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            "delta-stepping completed"
        );

        Ok((ShortestPaths::new(source, state.into_distances()), stats))
    }

    /// Visits buckets in increasing index order. `pending` holds every index
    /// a relaxation has inserted into and is maintained on this thread from
    /// the per-phase reductions. Indices whose bucket has since emptied are
    /// dropped without being counted.
    fn settle_buckets<O: RelaxationObserver>(
        &self,
        state: &RelaxationState<'_, O>,
        started: Instant,
    ) -> Result<()> {
        let mut pending = BTreeSet::from([0]);
        while let Some(index) = pending.pop_first() {
            if !state.buckets().is_live(index) {
                continue;
            }
            self.check_deadline(started, state.stats().buckets_processed())?;
            settle_bucket(&self.pool, state, index, &mut pending)?;
        }
        Ok(())
    }

    fn check_deadline(&self, started: Instant, buckets_processed: u64) -> Result<()> {
        match self.deadline {
            Some(deadline) if started.elapsed() >= deadline => {
                warn!(
                    buckets_processed,
                    deadline_ms = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
                    "delta-stepping deadline exceeded"
                );
                Err(SsspError::DeadlineExceeded { buckets_processed })
            }
            _ => Ok(()),
        }
    }
}

/// Drains bucket `index` through light sub-rounds, then relaxes the heavy
/// edges of every vertex that passed through it. Buckets that receive
/// vertices are added to `pending`.
///
/// Bookkeeping and logging stay on the calling thread; only the relaxation
/// phases run on `pool`.
fn settle_bucket<O: RelaxationObserver>(
    pool: &rayon::ThreadPool,
    state: &RelaxationState<'_, O>,
    index: BucketIndex,
    pending: &mut BTreeSet<BucketIndex>,
) -> Result<()> {
    let mut settled: Vec<VertexId> = Vec::new();
    loop {
        let frontier = state.buckets().take(index);
        if frontier.is_empty() {
            break;
        }
        state.stats().record_light_round();
        let mut touched = relax_in_parallel(pool, state, &frontier, EdgeClass::Light)?;
        // Light edges refill `index` itself; the loop above drains it.
        touched.remove(&index);
        pending.append(&mut touched);
        settled.extend(frontier);
    }

    settled.sort_unstable();
    settled.dedup();
    let mut touched = relax_in_parallel(pool, state, &settled, EdgeClass::Heavy)?;
    pending.append(&mut touched);

    state.stats().record_bucket(index);
    debug!(bucket = index, settled = settled.len(), "bucket settled");
    Ok(())
}

/// Relaxes `class` edges of `vertices` on `pool`, returning the indices of
/// every bucket that received a vertex.
fn relax_in_parallel<O: RelaxationObserver>(
    pool: &rayon::ThreadPool,
    state: &RelaxationState<'_, O>,
    vertices: &[VertexId],
    class: EdgeClass,
) -> Result<BTreeSet<BucketIndex>> {
    pool.install(|| {
        vertices
            .par_iter()
            .try_fold(
                BTreeSet::new,
                |mut touched, &vertex| -> Result<BTreeSet<BucketIndex>> {
                    state.relax_edges(vertex, class, &mut touched)?;
                    Ok(touched)
                },
            )
            .try_reduce(BTreeSet::new, |mut left, mut right| {
                left.append(&mut right);
                Ok(left)
            })
    })
}

/// Computes shortest paths with a one-off engine of `thread_count` workers.
///
/// Prefer building a [`DeltaStepping`] once via [`DeltaSteppingBuilder`]
/// when running several queries; each call here spawns a fresh pool.
///
/// # Errors
/// Returns [`SsspError::InvalidDelta`] or [`SsspError::InvalidThreadCount`]
/// for a zero `delta` or `thread_count`, plus every error of
/// [`DeltaStepping::run`].
///
/// # Examples
/// ```
/// use sssp_core::{Graph, compute_sssp};
///
/// let mut graph = Graph::new(2);
/// graph.add_undirected_edge(0, 1, 7)?;
/// let paths = compute_sssp(&graph, 1, 3, 2)?;
/// assert_eq!(paths.distances(), &[7, 0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute_sssp(
    graph: &Graph,
    source: VertexId,
    delta: u64,
    thread_count: usize,
) -> Result<ShortestPaths> {
    DeltaSteppingBuilder::new()
        .with_delta(delta)
        .with_threads(thread_count)
        .build()?
        .run(graph, source)
}
