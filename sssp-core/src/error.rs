//! Error types for the shortest-path core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::graph::{VertexId, Weight};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint referenced a vertex outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex identifier.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint referenced a vertex outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
    }
}

/// Error type produced when configuring or running a shortest-path engine.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SsspError {
    /// The graph has no vertices, so no source can be valid.
    #[error("cannot compute shortest paths on an empty graph")]
    EmptyGraph,
    /// The requested source vertex does not exist.
    #[error("source vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    SourceOutOfRange {
        /// The rejected source vertex.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Bucket width must be strictly positive.
    #[error("delta must be at least 1 (got {got})")]
    InvalidDelta {
        /// The rejected bucket width.
        got: u64,
    },
    /// Worker pools need at least one thread.
    #[error("thread count must be at least 1 (got {got})")]
    InvalidThreadCount {
        /// The rejected thread count.
        got: usize,
    },
    /// An edge carried a negative weight.
    #[error("edge ({tail}, {head}) has negative weight {weight}")]
    NegativeWeight {
        /// Tail of the offending edge.
        tail: VertexId,
        /// Head of the offending edge.
        head: VertexId,
        /// The negative weight.
        weight: Weight,
    },
    /// An edge pointed at a vertex that is not part of the graph.
    #[error("edge ({tail}, {head}) targets a vertex outside a graph with {vertex_count} vertices")]
    InvalidVertex {
        /// Tail of the offending edge.
        tail: VertexId,
        /// Head of the offending edge.
        head: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A tentative distance exceeded the representable range.
    #[error("tentative distance to vertex {vertex} overflowed")]
    DistanceOverflow {
        /// Vertex whose candidate distance overflowed.
        vertex: VertexId,
    },
    /// The configured deadline elapsed between bucket rounds.
    #[error("deadline exceeded after processing {buckets_processed} buckets")]
    DeadlineExceeded {
        /// Number of buckets fully processed before the deadline check failed.
        buckets_processed: u64,
    },
    /// The worker pool could not be constructed.
    #[error("failed to build worker pool: {message}")]
    ThreadPool {
        /// Message reported by the pool builder.
        message: Arc<str>,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`SsspError`] variants.
    enum SsspErrorCode for SsspError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "SSSP_EMPTY_GRAPH",
        /// The requested source vertex does not exist.
        SourceOutOfRange => SourceOutOfRange { .. } => "SSSP_SOURCE_OUT_OF_RANGE",
        /// Bucket width must be strictly positive.
        InvalidDelta => InvalidDelta { .. } => "SSSP_INVALID_DELTA",
        /// Worker pools need at least one thread.
        InvalidThreadCount => InvalidThreadCount { .. } => "SSSP_INVALID_THREAD_COUNT",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "SSSP_NEGATIVE_WEIGHT",
        /// An edge pointed at a vertex outside the graph.
        InvalidVertex => InvalidVertex { .. } => "SSSP_INVALID_VERTEX",
        /// A tentative distance exceeded the representable range.
        DistanceOverflow => DistanceOverflow { .. } => "SSSP_DISTANCE_OVERFLOW",
        /// The configured deadline elapsed.
        DeadlineExceeded => DeadlineExceeded { .. } => "SSSP_DEADLINE_EXCEEDED",
        /// The worker pool could not be constructed.
        ThreadPool => ThreadPool { .. } => "SSSP_THREAD_POOL",
        /// A synchronisation primitive became poisoned.
        LockPoisoned => LockPoisoned { .. } => "SSSP_LOCK_POISONED",
    }
}

impl SsspError {
    /// Returns `true` when the error stems from caller input rather than from
    /// the run itself.
    ///
    /// # Examples
    /// ```
    /// use sssp_core::SsspError;
    ///
    /// assert!(SsspError::InvalidDelta { got: 0 }.is_usage_error());
    /// assert!(!SsspError::DeadlineExceeded { buckets_processed: 3 }.is_usage_error());
    /// ```
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyGraph
                | Self::SourceOutOfRange { .. }
                | Self::InvalidDelta { .. }
                | Self::InvalidThreadCount { .. }
                | Self::NegativeWeight { .. }
                | Self::InvalidVertex { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SsspError>;
