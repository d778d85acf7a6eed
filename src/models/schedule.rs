//! Schedule (placement) model.
//!
//! A schedule is one concrete placement: a room, a day, and a half-open
//! time interval `[start_time, end_time)`. Schedules carry no validity
//! of their own — validity is course-relative and checked by
//! [`Course::set_schedule`](super::Course::set_schedule).
//!
//! The only intrinsic behavior is the pairwise [`overlaps`](Schedule::overlaps)
//! predicate, which the search engine uses to count resource conflicts.

use serde::Serialize;
use std::sync::Arc;

use super::{Classroom, Day};

/// One concrete placement of a course meeting.
///
/// Two schedules are equal when they place the *same room handle* on the
/// same day over the same interval; rooms are compared by identity, not
/// by name.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    /// Shared handle to the occupied room.
    pub room: Arc<Classroom>,
    /// Day of the meeting.
    pub day: Day,
    /// Interval start (inclusive).
    pub start_time: i32,
    /// Interval end (exclusive).
    pub end_time: i32,
}

impl Schedule {
    /// Creates a placement. No validation happens here.
    pub fn new(room: Arc<Classroom>, day: Day, start_time: i32, end_time: i32) -> Self {
        Self {
            room,
            day,
            start_time,
            end_time,
        }
    }

    /// Interval length (`end_time - start_time`).
    #[inline]
    pub fn duration(&self) -> i32 {
        self.end_time - self.start_time
    }

    /// Whether two placements claim the same room at the same time.
    ///
    /// True iff both use the identical room handle, fall on the same day,
    /// and their half-open intervals `[start, end)` intersect. Intervals
    /// that merely touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Schedule) -> bool {
        Arc::ptr_eq(&self.room, &other.room)
            && self.day == other.day
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }
}

impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.room, &other.room)
            && self.day == other.day
            && self.start_time == other.start_time
            && self.end_time == other.end_time
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} [{}, {})",
            self.room.name(),
            self.day,
            self.start_time,
            self.end_time
        )
    }
}
