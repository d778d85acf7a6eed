//! Course timetabling via genetic search.
//!
//! Assigns course meetings to classrooms, days, and time windows subject
//! to per-course constraints, and searches for a conflict-free (or
//! minimally conflicting) assignment of an entire course set with a
//! generational genetic algorithm.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Classroom`, `Day`, `Schedule`, `Course` —
//!   with ordered schedule validation
//! - **`ga`**: Candidate states, genetic operators, selection policies,
//!   and the generational driver
//! - **`validation`**: Input integrity checks (duplicate names, roster
//!   references, infeasible courses)
//!
//! # Quick Start
//!
//! ```
//! use u_timetable::models::{Classroom, Course, Day};
//! use u_timetable::ga::{genetic_algorithm, GaConfig};
//!
//! let rooms = vec![
//!     Classroom::shared("7606", 8, 16).unwrap(),
//!     Classroom::shared("7602", 8, 16).unwrap(),
//! ];
//! let courses = vec![
//!     Course::new("AI", 2, 7, 15, rooms.clone(), [Day::Monday, Day::Tuesday]).unwrap(),
//!     Course::new("TBFO", 3, 8, 16, rooms.clone(), [Day::Monday, Day::Tuesday]).unwrap(),
//! ];
//!
//! let config = GaConfig::default()
//!     .with_population_size(10)
//!     .with_max_generations(10)
//!     .with_seed(42);
//! let result = genetic_algorithm(rooms, courses, &config).unwrap();
//! assert_eq!(result.best_fitness, 0);
//! ```
//!
//! Zero conflicts is not guaranteed in general; inspect the returned
//! `best_fitness`.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"

pub mod ga;
pub mod models;
pub mod validation;
