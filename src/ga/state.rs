//! Candidate solution representation.
//!
//! A [`State`] assigns one schedule to every course in the run: it is one
//! individual in the GA population. Fitness is the number of unordered
//! course pairs whose schedules claim the same room at the same time —
//! zero means a conflict-free timetable.
//!
//! States own their courses outright and never alias another state's
//! mutable data; crossover and mutation construct fresh states.

use rand::Rng;

use super::types::Individual;
use crate::models::Course;

/// Error: a course's constraint set admits no placement at all.
///
/// Raised by [`State::init_random_schedule`] instead of retrying forever.
/// Detected eagerly by [`validate_input`](crate::validation::validate_input)
/// before a run, so it cannot surface through
/// [`genetic_algorithm`](crate::ga::genetic_algorithm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfeasibleCourseError {
    course: String,
}

impl InfeasibleCourseError {
    fn new(course: impl Into<String>) -> Self {
        Self {
            course: course.into(),
        }
    }

    /// Name of the unschedulable course.
    pub fn course(&self) -> &str {
        &self.course
    }
}

impl std::fmt::Display for InfeasibleCourseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "course '{}' admits no valid placement", self.course)
    }
}

impl std::error::Error for InfeasibleCourseError {}

/// One candidate full assignment of schedules to courses.
///
/// Carries a cached fitness in the minimization convention:
/// `u32::MAX` means not yet evaluated.
#[derive(Debug, Clone)]
pub struct State {
    courses: Vec<Course>,
    fitness: u32,
}

impl State {
    /// Creates a state over the given course set.
    ///
    /// Courses may arrive unscheduled; call
    /// [`init_random_schedule`](State::init_random_schedule) to place
    /// every course before evaluation.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            fitness: u32::MAX,
        }
    }

    /// The courses of this candidate, in canonical order.
    #[inline]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses.
    #[inline]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the state holds no courses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Assigns every course a uniformly random placement from its own
    /// feasible domain.
    ///
    /// Fails with [`InfeasibleCourseError`] on the first course whose
    /// constraints admit no placement (empty day set, or no room window
    /// fits the duration) — a configuration error, never silently
    /// retried.
    pub fn init_random_schedule<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), InfeasibleCourseError> {
        for course in &mut self.courses {
            let schedule = course
                .random_schedule(rng)
                .ok_or_else(|| InfeasibleCourseError::new(course.name()))?;
            course
                .set_schedule(schedule)
                .expect("random_schedule draws only course-valid placements");
        }
        self.fitness = u32::MAX;
        Ok(())
    }

    /// Counts conflicting course pairs: unordered pairs of distinct
    /// courses whose schedules occupy the same room on the same day with
    /// overlapping time intervals.
    ///
    /// Courses without a schedule (transient, mid-construction)
    /// contribute no pairs. Zero is the conflict-free optimum.
    pub fn fitness_score(&self) -> u32 {
        let mut conflicts = 0u32;
        for (i, a) in self.courses.iter().enumerate() {
            let Ok(sa) = a.schedule() else { continue };
            for b in &self.courses[i + 1..] {
                let Ok(sb) = b.schedule() else { continue };
                if sa.overlaps(sb) {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// Produces a derived copy with one uniformly chosen course redrawn
    /// from its own feasible domain.
    ///
    /// The redrawn assignment is always course-valid; the pairwise
    /// conflict count may go either way.
    pub fn mutate<R: Rng>(&self, rng: &mut R) -> State {
        let mut next = self.clone();
        if !next.courses.is_empty() {
            let idx = rng.random_range(0..next.courses.len());
            next.reassign(idx, rng);
        }
        next
    }

    /// Redraws the placement of course `idx` from its feasible domain.
    ///
    /// Leaves the assignment unchanged if the course is infeasible
    /// (excluded up front by input validation).
    pub(crate) fn reassign<R: Rng>(&mut self, idx: usize, rng: &mut R) {
        if let Some(schedule) = self.courses[idx].random_schedule(rng) {
            self.courses[idx]
                .set_schedule(schedule)
                .expect("random_schedule draws only course-valid placements");
        }
        self.fitness = u32::MAX;
    }

    /// Copies course `idx`'s schedule from `donor` (a state over the
    /// same course set). Courses the donor left unscheduled are skipped.
    pub(crate) fn inherit(&mut self, idx: usize, donor: &State) {
        if let Ok(schedule) = donor.courses[idx].schedule() {
            let schedule = schedule.clone();
            self.courses[idx]
                .set_schedule(schedule)
                .expect("placement was valid for the same course in its parent");
        }
        self.fitness = u32::MAX;
    }
}

impl Individual for State {
    type Fitness = u32;

    fn fitness(&self) -> u32 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: u32) {
        self.fitness = fitness;
    }
}
