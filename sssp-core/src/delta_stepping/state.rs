//! Shared tentative-distance table and the relaxation primitive.
//!
//! Each vertex owns one lock. `relax` holds the lock of the vertex being
//! improved while it re-reads the distance, writes the new value and moves
//! the vertex between buckets, so a vertex is never observed in two buckets
//! and a stale candidate can never overwrite a smaller distance. Reads of a
//! tail's distance are lock-free: values only decrease, so a stale read is
//! always an upper bound.

use std::{
    collections::BTreeSet,
    num::NonZeroU64,
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use crate::{
    error::{Result, SsspError},
    graph::{Graph, VertexId},
    paths::{Distance, UNREACHABLE},
    validate::{edge_length, extend_distance},
};

use super::{
    buckets::{BucketIndex, BucketMap},
    stats::StatsRecorder,
};

/// Callback invoked after every successful relaxation.
pub(crate) trait RelaxationObserver: Sync {
    fn improved(&self, vertex: VertexId, previous: Distance, next: Distance);
}

/// Observer that ignores every notification.
pub(crate) struct NoopObserver;

impl RelaxationObserver for NoopObserver {
    fn improved(&self, _vertex: VertexId, _previous: Distance, _next: Distance) {}
}

/// Partition of edges by weight relative to `delta`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum EdgeClass {
    /// `weight <= delta`; may requeue into the current bucket.
    Light,
    /// `weight > delta`; always lands in a later bucket.
    Heavy,
}

impl EdgeClass {
    fn admits(self, length: Distance, delta: NonZeroU64) -> bool {
        match self {
            Self::Light => length <= delta.get(),
            Self::Heavy => length > delta.get(),
        }
    }
}

pub(super) struct RelaxationState<'a, O> {
    graph: &'a Graph,
    delta: NonZeroU64,
    distances: Vec<AtomicU64>,
    locks: Vec<Mutex<()>>,
    buckets: BucketMap,
    stats: StatsRecorder,
    observer: &'a O,
}

impl<'a, O: RelaxationObserver> RelaxationState<'a, O> {
    /// Initialises every distance to [`UNREACHABLE`] except `source`, which
    /// starts at zero in bucket 0. Inputs must already be validated.
    pub(super) fn new(
        graph: &'a Graph,
        delta: NonZeroU64,
        source: VertexId,
        observer: &'a O,
    ) -> Self {
        let vertex_count = graph.vertex_count();
        let distances = (0..vertex_count)
            .map(|vertex| AtomicU64::new(if vertex == source { 0 } else { UNREACHABLE }))
            .collect();
        let locks = (0..vertex_count).map(|_| Mutex::new(())).collect();
        let buckets = BucketMap::new();
        buckets.insert(0, source);

        Self {
            graph,
            delta,
            distances,
            locks,
            buckets,
            stats: StatsRecorder::default(),
            observer,
        }
    }

    pub(super) fn buckets(&self) -> &BucketMap {
        &self.buckets
    }

    pub(super) fn stats(&self) -> &StatsRecorder {
        &self.stats
    }

    pub(super) fn distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(vertex)
            .map_or(UNREACHABLE, |slot| slot.load(Ordering::Acquire))
    }

    pub(super) fn bucket_of(&self, distance: Distance) -> BucketIndex {
        distance / self.delta
    }

    /// Relaxes every outgoing edge of `tail` that belongs to `class`,
    /// adding the bucket of every improved head to `touched`.
    pub(super) fn relax_edges(
        &self,
        tail: VertexId,
        class: EdgeClass,
        touched: &mut BTreeSet<BucketIndex>,
    ) -> Result<()> {
        let base = self.distance(tail);
        if base == UNREACHABLE {
            return Ok(());
        }

        let mut attempts = 0_u64;
        for edge in self.graph.neighbors(tail) {
            let length = edge_length(tail, edge)?;
            if !class.admits(length, self.delta) {
                continue;
            }
            attempts = attempts.saturating_add(1);
            let candidate = extend_distance(base, length, edge.target())?;
            if self.relax(tail, edge.target(), candidate)? {
                touched.insert(self.bucket_of(candidate));
            }
        }

        match class {
            EdgeClass::Light => self.stats.record_attempts(attempts, 0),
            EdgeClass::Heavy => self.stats.record_attempts(0, attempts),
        }
        Ok(())
    }

    /// Lowers `head` to `candidate` when it improves the tentative distance,
    /// moving the vertex to its new bucket. Returns whether it improved.
    pub(super) fn relax(
        &self,
        tail: VertexId,
        head: VertexId,
        candidate: Distance,
    ) -> Result<bool> {
        let (slot, lock) = self.slot(tail, head)?;
        if candidate >= slot.load(Ordering::Acquire) {
            return Ok(false);
        }

        let _guard = lock.lock().map_err(|_| SsspError::LockPoisoned {
            resource: "vertex relaxation lock",
        })?;
        let previous = slot.load(Ordering::Acquire);
        if candidate >= previous {
            return Ok(false);
        }
        if previous != UNREACHABLE {
            self.buckets.remove(self.bucket_of(previous), head);
        }
        slot.store(candidate, Ordering::Release);
        self.buckets.insert(self.bucket_of(candidate), head);

        self.stats.record_improvement();
        self.observer.improved(head, previous, candidate);
        Ok(true)
    }

    fn slot(&self, tail: VertexId, head: VertexId) -> Result<(&AtomicU64, &Mutex<()>)> {
        self.distances
            .get(head)
            .zip(self.locks.get(head))
            .ok_or(SsspError::InvalidVertex {
                tail,
                head,
                vertex_count: self.distances.len(),
            })
    }

    pub(super) fn into_distances(self) -> Vec<Distance> {
        self.distances
            .into_iter()
            .map(AtomicU64::into_inner)
            .collect()
    }
}
