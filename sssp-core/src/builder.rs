//! Builder utilities for configuring the Delta-Stepping engine.
//!
//! Validates the bucket width and worker count and constructs the dedicated
//! worker pool used by [`DeltaStepping`] instances.

use std::{num::NonZeroU64, sync::Arc, time::Duration};

use crate::{
    Result,
    delta_stepping::DeltaStepping,
    error::SsspError,
};

/// Worker count used when none is configured.
pub const DEFAULT_THREADS: usize = 4;

/// Bucket width used when none is configured.
pub const DEFAULT_DELTA: u64 = 1;

/// Configures and constructs [`DeltaStepping`] instances.
///
/// # Examples
/// ```
/// use sssp_core::DeltaSteppingBuilder;
///
/// let engine = DeltaSteppingBuilder::new()
///     .with_delta(8)
///     .with_threads(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(engine.delta().get(), 8);
/// assert_eq!(engine.threads(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DeltaSteppingBuilder {
    delta: u64,
    threads: usize,
    deadline: Option<Duration>,
}

impl Default for DeltaSteppingBuilder {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            threads: DEFAULT_THREADS,
            deadline: None,
        }
    }
}

impl DeltaSteppingBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use sssp_core::DeltaSteppingBuilder;
    ///
    /// let builder = DeltaSteppingBuilder::new();
    /// assert_eq!(builder.delta(), 1);
    /// assert_eq!(builder.threads(), 4);
    /// assert!(builder.deadline().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the bucket width.
    #[must_use]
    pub fn with_delta(mut self, delta: u64) -> Self {
        self.delta = delta;
        self
    }

    /// Returns the configured bucket width.
    #[must_use]
    pub fn delta(&self) -> u64 {
        self.delta
    }

    /// Overrides the number of worker threads.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Returns the configured number of worker threads.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Aborts runs that are still processing buckets after `deadline`.
    ///
    /// The check happens between bucket rounds, so a run may overshoot the
    /// deadline by the duration of one bucket.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use sssp_core::DeltaSteppingBuilder;
    ///
    /// let builder = DeltaSteppingBuilder::new().with_deadline(Duration::from_secs(2));
    /// assert_eq!(builder.deadline(), Some(Duration::from_secs(2)));
    /// ```
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the configured deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Validates the configuration and constructs a [`DeltaStepping`] engine
    /// backed by a worker pool of exactly [`Self::threads`] threads.
    ///
    /// # Errors
    /// Returns [`SsspError::InvalidDelta`] for a zero bucket width,
    /// [`SsspError::InvalidThreadCount`] for a zero worker count, and
    /// [`SsspError::ThreadPool`] when the worker pool cannot be spawned.
    ///
    /// # Examples
    /// ```
    /// use sssp_core::{DeltaSteppingBuilder, SsspError};
    ///
    /// let err = DeltaSteppingBuilder::new().with_delta(0).build().unwrap_err();
    /// assert_eq!(err, SsspError::InvalidDelta { got: 0 });
    /// ```
    pub fn build(self) -> Result<DeltaStepping> {
        let delta = NonZeroU64::new(self.delta).ok_or(SsspError::InvalidDelta { got: self.delta })?;
        if self.threads == 0 {
            return Err(SsspError::InvalidThreadCount { got: self.threads });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|index| format!("sssp-worker-{index}"))
            .build()
            .map_err(|error| SsspError::ThreadPool {
                message: Arc::from(error.to_string()),
            })?;

        Ok(DeltaStepping::new(
            delta,
            self.threads,
            self.deadline,
            Arc::new(pool),
        ))
    }
}
