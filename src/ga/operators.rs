//! Configurable genetic operators for timetabling.
//!
//! Provides runtime-selectable crossover and mutation strategies
//! via [`GeneticOperators`].
//!
//! Every operator works per course over the canonical course ordering:
//! crossover inherits each course's schedule verbatim from one parent,
//! and mutation redraws schedules only from each course's own feasible
//! domain, so offspring are always course-valid. Pairwise conflict
//! counts are not preserved and must be re-evaluated.
//!
//! # Usage
//!
//! ```
//! use u_timetable::ga::{GeneticOperators, CrossoverType, MutationType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_type, CrossoverType::Uniform);
//! assert_eq!(ops.mutation_type, MutationType::Reassign);
//! ```

use rand::Rng;

use super::state::State;

/// Crossover strategy for timetable states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverType {
    /// Independent coin flip per course: each child inherits that
    /// course's schedule from one parent or the other.
    Uniform,
    /// Single cut point over the canonical course ordering; courses
    /// before the cut come from one parent, the rest from the other.
    OnePoint,
}

/// Mutation strategy for timetable states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationType {
    /// Redraw one uniformly chosen course's schedule.
    Reassign,
    /// Redraw each course independently with probability `1/n`,
    /// with at least one redraw guaranteed.
    EachCourse,
}

/// Performs uniform crossover: a fair coin per course decides which
/// parent each child inherits that course's schedule from (the children
/// take opposite sides of every coin).
///
/// Parents of mismatched course counts are returned as plain clones.
pub fn uniform_crossover<R: Rng>(p1: &State, p2: &State, rng: &mut R) -> (State, State) {
    let mut c1 = p1.clone();
    let mut c2 = p2.clone();
    if p1.len() != p2.len() {
        return (c1, c2);
    }
    for idx in 0..p1.len() {
        if rng.random_bool(0.5) {
            c1.inherit(idx, p2);
            c2.inherit(idx, p1);
        }
    }
    (c1, c2)
}

/// Performs one-point crossover: courses at indices `>= cut` swap
/// parents, where `cut` is drawn uniformly from `1..len`.
///
/// Degenerate inputs (mismatched or fewer than two courses) are
/// returned as plain clones.
pub fn one_point_crossover<R: Rng>(p1: &State, p2: &State, rng: &mut R) -> (State, State) {
    let mut c1 = p1.clone();
    let mut c2 = p2.clone();
    if p1.len() != p2.len() || p1.len() < 2 {
        return (c1, c2);
    }
    let cut = rng.random_range(1..p1.len());
    for idx in cut..p1.len() {
        c1.inherit(idx, p2);
        c2.inherit(idx, p1);
    }
    (c1, c2)
}

/// Reassign mutation: derived copy with one uniformly chosen course
/// redrawn from its own feasible domain.
pub fn reassign_mutation<R: Rng>(state: &State, rng: &mut R) -> State {
    state.mutate(rng)
}

/// Each-course mutation: derived copy where every course is redrawn
/// independently with probability `1/n`; one uniformly chosen course is
/// always redrawn so the operator never degenerates to a plain copy.
pub fn each_course_mutation<R: Rng>(state: &State, rng: &mut R) -> State {
    let mut next = state.clone();
    let n = next.len();
    if n == 0 {
        return next;
    }
    let forced = rng.random_range(0..n);
    let rate = 1.0 / n as f64;
    for idx in 0..n {
        if idx == forced || rng.random_bool(rate) {
            next.reassign(idx, rng);
        }
    }
    next
}

/// Runtime-selectable genetic operators for the timetabling GA.
///
/// Wraps crossover and mutation strategy selection so callers can
/// switch operators via configuration without changing the problem
/// definition.
#[derive(Debug, Clone)]
pub struct GeneticOperators {
    /// Crossover strategy.
    pub crossover_type: CrossoverType,
    /// Mutation strategy.
    pub mutation_type: MutationType,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_type: CrossoverType::Uniform,
            mutation_type: MutationType::Reassign,
        }
    }
}

impl GeneticOperators {
    /// Performs crossover using the configured strategy.
    pub fn crossover<R: Rng>(&self, p1: &State, p2: &State, rng: &mut R) -> (State, State) {
        match self.crossover_type {
            CrossoverType::Uniform => uniform_crossover(p1, p2, rng),
            CrossoverType::OnePoint => one_point_crossover(p1, p2, rng),
        }
    }

    /// Performs mutation using the configured strategy.
    pub fn mutate<R: Rng>(&self, state: &State, rng: &mut R) -> State {
        match self.mutation_type {
            MutationType::Reassign => reassign_mutation(state, rng),
            MutationType::EachCourse => each_course_mutation(state, rng),
        }
    }
}
