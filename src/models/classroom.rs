//! Classroom model.
//!
//! A classroom is a static resource with an operating time window.
//! Instances are immutable after construction and shared by reference
//! (`Arc`) among courses, schedules, and candidate solutions — room
//! identity throughout the crate is handle identity, not name equality.
//!
//! # Time Model
//! Times are abstract `i32` units (whole hours in the examples); the
//! consumer defines the granularity.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A classroom with an operating window `[open_time, close_time)`.
///
/// Construction enforces `open_time < close_time`; the fields are
/// immutable afterwards, so handles can be shared freely without
/// locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    name: String,
    open_time: i32,
    close_time: i32,
}

/// Error: a time window with `open_time >= close_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidTimeRange {
    open_time: i32,
    close_time: i32,
}

impl InvalidTimeRange {
    pub(crate) fn new(open_time: i32, close_time: i32) -> Self {
        Self {
            open_time,
            close_time,
        }
    }

    /// The rejected opening time.
    #[inline]
    pub fn open_time(&self) -> i32 {
        self.open_time
    }

    /// The rejected closing time.
    #[inline]
    pub fn close_time(&self) -> i32 {
        self.close_time
    }
}

impl std::fmt::Display for InvalidTimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "open_time {} is not before close_time {}",
            self.open_time, self.close_time
        )
    }
}

impl std::error::Error for InvalidTimeRange {}

impl Classroom {
    /// Creates a classroom.
    ///
    /// Fails with [`InvalidTimeRange`] unless `open_time < close_time`.
    pub fn new(
        name: impl Into<String>,
        open_time: i32,
        close_time: i32,
    ) -> Result<Self, InvalidTimeRange> {
        if open_time >= close_time {
            return Err(InvalidTimeRange::new(open_time, close_time));
        }
        Ok(Self {
            name: name.into(),
            open_time,
            close_time,
        })
    }

    /// Creates a classroom already wrapped in a shared handle.
    ///
    /// Convenience for the common case: rooms are shared by reference
    /// among many courses and schedules.
    pub fn shared(
        name: impl Into<String>,
        open_time: i32,
        close_time: i32,
    ) -> Result<Arc<Self>, InvalidTimeRange> {
        Self::new(name, open_time, close_time).map(Arc::new)
    }

    /// Room name. Assumed unique within a run.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opening time (inclusive).
    #[inline]
    pub fn open_time(&self) -> i32 {
        self.open_time
    }

    /// Closing time (exclusive).
    #[inline]
    pub fn close_time(&self) -> i32 {
        self.close_time
    }
}

impl std::fmt::Display for Classroom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Classroom {} [{}, {})",
            self.name, self.open_time, self.close_time
        )
    }
}
