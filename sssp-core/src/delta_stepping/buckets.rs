//! Growable bucket index for Delta-Stepping.
//!
//! Buckets are keyed by `tentative_distance / delta` and created on demand,
//! so arbitrarily large weights never run past a preallocated range. Empty
//! buckets are dropped eagerly, so a present key always names a non-empty
//! bucket. The order in which buckets are visited is tracked by the engine,
//! not by this map.
//!
//! Membership updates for a single vertex are serialised by the caller (the
//! per-vertex relaxation lock); this type only guarantees that concurrent
//! updates to *different* vertices do not corrupt the map.

use std::collections::HashSet;

use dashmap::DashMap;

use crate::graph::VertexId;

pub(super) type BucketIndex = u64;

#[derive(Debug, Default)]
pub(super) struct BucketMap {
    buckets: DashMap<BucketIndex, HashSet<VertexId>>,
}

impl BucketMap {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn insert(&self, index: BucketIndex, vertex: VertexId) {
        self.buckets.entry(index).or_default().insert(vertex);
    }

    /// Removes `vertex` from bucket `index`; a no-op when it is absent (for
    /// example because the bucket was already drained into a frontier).
    pub(super) fn remove(&self, index: BucketIndex, vertex: VertexId) {
        let now_empty = match self.buckets.get_mut(&index) {
            Some(mut bucket) => {
                bucket.remove(&vertex);
                bucket.is_empty()
            }
            None => return,
        };
        // The shard guard above must be released before `remove_if` locks
        // the same shard again.
        if now_empty {
            self.buckets.remove_if(&index, |_, bucket| bucket.is_empty());
        }
    }

    /// Drains bucket `index`, returning its members in ascending order.
    pub(super) fn take(&self, index: BucketIndex) -> Vec<VertexId> {
        self.buckets
            .remove(&index)
            .map(|(_, bucket)| {
                let mut members: Vec<VertexId> = bucket.into_iter().collect();
                members.sort_unstable();
                members
            })
            .unwrap_or_default()
    }

    /// Whether bucket `index` currently holds any vertex.
    pub(super) fn is_live(&self, index: BucketIndex) -> bool {
        self.buckets
            .get(&index)
            .is_some_and(|bucket| !bucket.is_empty())
    }

    pub(super) fn contains(&self, index: BucketIndex, vertex: VertexId) -> bool {
        self.buckets
            .get(&index)
            .is_some_and(|bucket| bucket.contains(&vertex))
    }

    pub(super) fn live_buckets(&self) -> usize {
        self.buckets.len()
    }
}
