//! Timetabling GA problem definition.
//!
//! Implements [`GaProblem`] for course timetabling. Bridges the domain
//! models ([`Classroom`], [`Course`]) to the generic runner: random
//! states, conflict-count evaluation, and operator dispatch.
//!
//! The problem owns the immutable run configuration — the classroom
//! roster and the unscheduled course templates. Validate it with
//! [`TimetableProblem::validate`] (or go through
//! [`genetic_algorithm`](super::runner::genetic_algorithm), which
//! validates eagerly) before running.

use std::sync::Arc;

use rand::Rng;

use super::operators::GeneticOperators;
use super::state::State;
use super::types::GaProblem;
use crate::models::{Classroom, Course};
use crate::validation::{ValidationResult, validate_input};

/// GA problem definition for course timetabling.
///
/// # Example
/// ```no_run
/// use u_timetable::models::Classroom;
/// use u_timetable::ga::{TimetableProblem, GaConfig, GaRunner};
///
/// let rooms = vec![Classroom::shared("7606", 8, 16).unwrap()];
/// let courses = vec![/* ... */];
/// let problem = TimetableProblem::new(rooms, courses);
/// problem.validate().unwrap();
/// let result = GaRunner::run(&problem, &GaConfig::default());
/// ```
pub struct TimetableProblem {
    classrooms: Vec<Arc<Classroom>>,
    courses: Vec<Course>,
    operators: GeneticOperators,
}

impl TimetableProblem {
    /// Creates a problem from the classroom roster and course set.
    ///
    /// Courses are templates: any schedule they already hold is carried
    /// into initial states but overwritten by random initialization.
    pub fn new(classrooms: Vec<Arc<Classroom>>, courses: Vec<Course>) -> Self {
        Self {
            classrooms,
            courses,
            operators: GeneticOperators::default(),
        }
    }

    /// Sets the genetic operators.
    pub fn with_operators(mut self, operators: GeneticOperators) -> Self {
        self.operators = operators;
        self
    }

    /// The classroom roster.
    #[inline]
    pub fn classrooms(&self) -> &[Arc<Classroom>] {
        &self.classrooms
    }

    /// The course templates.
    #[inline]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Checks the input integrity of the run configuration: duplicate
    /// names, rooms outside the roster, and unschedulable courses.
    pub fn validate(&self) -> ValidationResult {
        validate_input(&self.classrooms, &self.courses)
    }
}

impl GaProblem for TimetableProblem {
    type Individual = State;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> State {
        let mut state = State::new(self.courses.clone());
        state
            .init_random_schedule(rng)
            .expect("validated course sets admit a placement for every course");
        state
    }

    fn evaluate(&self, state: &State) -> u32 {
        state.fitness_score()
    }

    fn crossover<R: Rng>(&self, parent1: &State, parent2: &State, rng: &mut R) -> Vec<State> {
        let (c1, c2) = self.operators.crossover(parent1, parent2, rng);
        vec![c1, c2]
    }

    fn mutate<R: Rng>(&self, state: &mut State, rng: &mut R) {
        *state = self.operators.mutate(state, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;
    use crate::validation::ValidationErrorKind;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn make_test_problem() -> TimetableProblem {
        let room_a = Classroom::shared("7606", 8, 16).unwrap();
        let room_b = Classroom::shared("7602", 8, 16).unwrap();
        let courses = vec![
            Course::new(
                "AI",
                2,
                7,
                15,
                vec![Arc::clone(&room_a), Arc::clone(&room_b)],
                [Day::Tuesday],
            )
            .unwrap(),
            Course::new(
                "TBFO",
                3,
                8,
                16,
                vec![Arc::clone(&room_a), Arc::clone(&room_b)],
                [Day::Monday, Day::Tuesday],
            )
            .unwrap(),
        ];
        TimetableProblem::new(vec![room_a, room_b], courses)
    }

    #[test]
    fn test_create_individual_is_fully_scheduled() {
        let problem = make_test_problem();
        let mut rng = SmallRng::seed_from_u64(42);

        let state = problem.create_individual(&mut rng);
        assert_eq!(state.len(), 2);
        for course in state.courses() {
            course.check_schedule().unwrap();
        }
    }

    #[test]
    fn test_evaluate_counts_conflicts() {
        let problem = make_test_problem();
        let mut rng = SmallRng::seed_from_u64(42);

        let state = problem.create_individual(&mut rng);
        assert_eq!(problem.evaluate(&state), state.fitness_score());
    }

    #[test]
    fn test_crossover_returns_two_offspring() {
        let problem = make_test_problem();
        let mut rng = SmallRng::seed_from_u64(42);

        let p1 = problem.create_individual(&mut rng);
        let p2 = problem.create_individual(&mut rng);
        let children = problem.crossover(&p1, &p2, &mut rng);
        assert_eq!(children.len(), 2);
        for child in &children {
            for course in child.courses() {
                course.check_schedule().unwrap();
            }
        }
    }

    #[test]
    fn test_mutate_replaces_in_place() {
        let problem = make_test_problem();
        let mut rng = SmallRng::seed_from_u64(42);

        let mut state = problem.create_individual(&mut rng);
        problem.mutate(&mut state, &mut rng);
        for course in state.courses() {
            course.check_schedule().unwrap();
        }
    }

    #[test]
    fn test_validate_rejects_foreign_room() {
        let roster_room = Classroom::shared("7606", 8, 16).unwrap();
        let foreign_room = Classroom::shared("off-roster", 8, 16).unwrap();
        let course = Course::new("AI", 2, 7, 15, vec![foreign_room], [Day::Tuesday]).unwrap();

        let problem = TimetableProblem::new(vec![roster_room], vec![course]);
        let errors = problem.validate().unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.kind == ValidationErrorKind::UnknownClassroom)
        );
    }

    #[test]
    fn test_validate_accepts_well_formed_input() {
        make_test_problem().validate().unwrap();
    }
}
