//! Timetabling domain models.
//!
//! Provides the core data types for representing course timetabling
//! problems and their solutions: rooms with opening hours, weekdays,
//! concrete placements, and constrained courses.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Training Center | Conference |
//! |-------------|------------|-----------------|------------|
//! | Classroom | Lecture Hall | Lab | Track Room |
//! | Course | Course Section | Workshop | Session |
//! | Schedule | Class Meeting | Workshop Slot | Talk Slot |
//! | Day | Teaching Day | Training Day | Conference Day |

mod classroom;
mod course;
mod day;
mod schedule;

pub use classroom::{Classroom, InvalidTimeRange};
pub use course::{Course, CourseError, ScheduleError, ScheduleViolation};
pub use day::Day;
pub use schedule::Schedule;
