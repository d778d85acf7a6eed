//! Genetic search engine for course timetabling.
//!
//! Evolves a population of candidate timetables ([`State`]: one schedule
//! per course) toward zero pairwise room/time conflicts. Every operator
//! draws only from each course's own feasible domain, so candidates stay
//! course-valid throughout the search; only the cross-course conflict
//! count is optimized.
//!
//! # Submodules
//!
//! - [`types`]: generic `Fitness` / `Individual` / `GaProblem` traits
//! - [`state`]: the candidate-solution representation
//! - [`operators`]: runtime-selectable crossover and mutation strategies
//! - [`selection`]: pluggable parent-selection policies
//! - [`problem`]: the timetabling `GaProblem` implementation
//! - [`runner`]: the generational driver and [`genetic_algorithm`]

pub mod operators;
pub mod problem;
pub mod runner;
pub mod selection;
pub mod state;
pub mod types;

pub use operators::{
    CrossoverType, GeneticOperators, MutationType, each_course_mutation, one_point_crossover,
    reassign_mutation, uniform_crossover,
};
pub use problem::TimetableProblem;
pub use runner::{GaConfig, GaError, GaResult, GaRunner, genetic_algorithm};
pub use selection::SelectionType;
pub use state::{InfeasibleCourseError, State};
pub use types::{Fitness, GaProblem, Individual};
