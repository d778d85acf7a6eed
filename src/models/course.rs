//! Course model and schedule validation.
//!
//! A course is the schedulable unit: it names the rooms and days it may
//! occupy, its meeting duration, and its own availability window, and it
//! owns at most one current [`Schedule`].
//!
//! # Validation Order
//!
//! [`Course::set_schedule`] runs five checks in a fixed order and reports
//! the **first** failure:
//!
//! 1. `start_time < max(room.open_time, course.open_time)` → `StartTime`
//! 2. `end_time  > min(room.close_time, course.close_time)` → `EndTime`
//! 3. `end_time - start_time != duration` → `Duration`
//! 4. `day` not in `possible_day` → `Day`
//! 5. `room` not in `possible_classroom` → `Classroom`
//!
//! Callers may rely on receiving the earliest applicable violation.
//! Room membership (check 5) is handle identity, not name equality.

use rand::Rng;
use rand::prelude::IndexedRandom;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::{Classroom, Day, InvalidTimeRange, Schedule};

/// Which of the five ordered checks a candidate schedule failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleViolation {
    /// Starts before the room and course are both open.
    StartTime,
    /// Ends after the room or course closes.
    EndTime,
    /// Interval length differs from the course duration.
    Duration,
    /// Day is not among the course's possible days.
    Day,
    /// Room is not among the course's possible classrooms.
    Classroom,
}

impl ScheduleViolation {
    /// The schedule field the candidate violated.
    pub fn field(&self) -> &'static str {
        match self {
            ScheduleViolation::StartTime => "start_time",
            ScheduleViolation::EndTime => "end_time",
            ScheduleViolation::Duration => "duration",
            ScheduleViolation::Day => "day",
            ScheduleViolation::Classroom => "classroom",
        }
    }
}

/// Error from schedule queries and assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleError {
    /// The course holds no schedule yet.
    NotDefined,
    /// The candidate schedule failed course validation.
    Invalid(ScheduleViolation),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::NotDefined => write!(f, "schedule is not defined"),
            ScheduleError::Invalid(v) => write!(f, "schedule's {} is not valid", v.field()),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Error from course construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// The possible-classroom set was empty.
    NoPossibleClassroom,
    /// The duration was zero or negative.
    InvalidDuration(i32),
    /// The course's own window had `open_time >= close_time`.
    InvalidWindow(InvalidTimeRange),
}

impl std::fmt::Display for CourseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseError::NoPossibleClassroom => write!(f, "course allows no classrooms"),
            CourseError::InvalidDuration(d) => write!(f, "course duration {d} is not positive"),
            CourseError::InvalidWindow(e) => write!(f, "course window: {e}"),
        }
    }
}

impl std::error::Error for CourseError {}

impl From<InvalidTimeRange> for CourseError {
    fn from(e: InvalidTimeRange) -> Self {
        CourseError::InvalidWindow(e)
    }
}

/// A schedulable course.
///
/// Constraint configuration (rooms, days, duration, window) is immutable
/// after construction; only the schedule slot changes, and only through
/// [`set_schedule`](Course::set_schedule). Cloning a course duplicates its
/// configuration and current schedule while sharing classroom handles.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    name: String,
    duration: i32,
    open_time: i32,
    close_time: i32,
    possible_classroom: Vec<Arc<Classroom>>,
    possible_day: Vec<Day>,
    schedule: Option<Schedule>,
}

impl Course {
    /// Creates an unscheduled course.
    ///
    /// `classrooms` must be non-empty and `duration` positive; the course's
    /// own window must satisfy `open_time < close_time`. An empty day set is
    /// accepted — such a course is constructible but can never validate a
    /// schedule. Duplicate days are collapsed so random draws stay uniform.
    pub fn new(
        name: impl Into<String>,
        duration: i32,
        open_time: i32,
        close_time: i32,
        classrooms: Vec<Arc<Classroom>>,
        days: impl IntoIterator<Item = Day>,
    ) -> Result<Self, CourseError> {
        if classrooms.is_empty() {
            return Err(CourseError::NoPossibleClassroom);
        }
        if duration <= 0 {
            return Err(CourseError::InvalidDuration(duration));
        }
        if open_time >= close_time {
            return Err(InvalidTimeRange::new(open_time, close_time).into());
        }
        let possible_day: Vec<Day> = days.into_iter().collect::<BTreeSet<Day>>().into_iter().collect();
        Ok(Self {
            name: name.into(),
            duration,
            open_time,
            close_time,
            possible_classroom: classrooms,
            possible_day,
            schedule: None,
        })
    }

    /// Course name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Meeting duration in time units.
    #[inline]
    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Course availability start (inclusive).
    #[inline]
    pub fn open_time(&self) -> i32 {
        self.open_time
    }

    /// Course availability end (exclusive).
    #[inline]
    pub fn close_time(&self) -> i32 {
        self.close_time
    }

    /// Rooms this course may occupy.
    #[inline]
    pub fn possible_classrooms(&self) -> &[Arc<Classroom>] {
        &self.possible_classroom
    }

    /// Days this course may meet on, sorted and deduplicated.
    #[inline]
    pub fn possible_days(&self) -> &[Day] {
        &self.possible_day
    }

    /// Whether a schedule is currently assigned.
    #[inline]
    pub fn has_schedule(&self) -> bool {
        self.schedule.is_some()
    }

    /// The current schedule, or [`ScheduleError::NotDefined`] if none
    /// has ever been assigned.
    pub fn schedule(&self) -> Result<&Schedule, ScheduleError> {
        self.schedule.as_ref().ok_or(ScheduleError::NotDefined)
    }

    /// Validates a candidate and, on success, replaces the held schedule.
    ///
    /// On failure the previously held schedule (if any) is untouched; the
    /// returned violation is the first failing check in the fixed order
    /// documented at the module level.
    pub fn set_schedule(&mut self, candidate: Schedule) -> Result<(), ScheduleError> {
        self.validate_schedule(&candidate)?;
        self.schedule = Some(candidate);
        Ok(())
    }

    /// Runs the five ordered checks against a candidate without
    /// assigning it.
    pub fn validate_schedule(&self, s: &Schedule) -> Result<(), ScheduleError> {
        let open = s.room.open_time().max(self.open_time);
        let close = s.room.close_time().min(self.close_time);

        if s.start_time < open {
            return Err(ScheduleError::Invalid(ScheduleViolation::StartTime));
        }
        if s.end_time > close {
            return Err(ScheduleError::Invalid(ScheduleViolation::EndTime));
        }
        if s.duration() != self.duration {
            return Err(ScheduleError::Invalid(ScheduleViolation::Duration));
        }
        if !self.possible_day.contains(&s.day) {
            return Err(ScheduleError::Invalid(ScheduleViolation::Day));
        }
        if !self
            .possible_classroom
            .iter()
            .any(|r| Arc::ptr_eq(r, &s.room))
        {
            return Err(ScheduleError::Invalid(ScheduleViolation::Classroom));
        }
        Ok(())
    }

    /// Re-validates the currently held schedule.
    ///
    /// Fails with [`ScheduleError::NotDefined`] when no schedule is held.
    pub fn check_schedule(&self) -> Result<(), ScheduleError> {
        let s = self.schedule.as_ref().ok_or(ScheduleError::NotDefined)?;
        self.validate_schedule(s)
    }

    /// Inclusive range of valid start times in `room`, or `None` when the
    /// room's window cannot fit this course.
    pub fn start_range_in(&self, room: &Classroom) -> Option<(i32, i32)> {
        let lo = room.open_time().max(self.open_time);
        let hi = room.close_time().min(self.close_time) - self.duration;
        (lo <= hi).then_some((lo, hi))
    }

    /// Whether any (room, day, start) placement can validate.
    pub fn is_feasible(&self) -> bool {
        !self.possible_day.is_empty()
            && self
                .possible_classroom
                .iter()
                .any(|r| self.start_range_in(r).is_some())
    }

    /// Draws a uniformly random placement from this course's own feasible
    /// domain: a feasible room, a possible day, and a start time such that
    /// the meeting fits both the room's window and the course's own.
    ///
    /// Returns `None` when the course is infeasible (empty day set, or no
    /// room window fits the duration). The returned schedule always passes
    /// [`validate_schedule`](Course::validate_schedule).
    pub fn random_schedule<R: Rng>(&self, rng: &mut R) -> Option<Schedule> {
        let day = *self.possible_day.choose(rng)?;
        let feasible: Vec<Arc<Classroom>> = self
            .possible_classroom
            .iter()
            .filter(|r| self.start_range_in(r).is_some())
            .cloned()
            .collect();
        let room = Arc::clone(feasible.choose(rng)?);
        let (lo, hi) = self.start_range_in(&room)?;
        let start = rng.random_range(lo..=hi);
        Some(Schedule::new(room, day, start, start + self.duration))
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.schedule {
            Some(s) => write!(f, "Course {}, {}", self.name, s),
            None => write!(f, "Course {}, unscheduled", self.name),
        }
    }
}
