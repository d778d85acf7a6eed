//! Generational GA driver.
//!
//! [`GaRunner`] evolves a fixed-size population toward lower fitness:
//! evaluate, select parents, recombine, perturb, replace. The loop stops
//! the moment any member's fitness is optimal (zero conflicts for
//! timetables) or when the generation budget elapses, and always returns
//! the best individual observed across all generations — reaching the
//! optimum is not guaranteed, so callers must inspect the returned
//! fitness.
//!
//! [`genetic_algorithm`] is the timetabling entry point: it validates
//! the configuration and the input eagerly, then runs.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::problem::TimetableProblem;
use super::selection::SelectionType;
use super::state::State;
use super::types::{Fitness, GaProblem, Individual};
use crate::models::{Classroom, Course};
use crate::validation::{ValidationError, validate_input};

/// Configuration for the generational GA.
///
/// # Examples
///
/// ```
/// use u_timetable::ga::{GaConfig, SelectionType};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(200)
///     .with_mutation_rate(0.2)
///     .with_selection(SelectionType::Tournament(3))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Population size, held constant across generations.
    pub population_size: usize,

    /// Generation budget.
    pub max_generations: usize,

    /// Probability that a parent pair is recombined; otherwise the
    /// parents are carried forward unchanged.
    pub crossover_rate: f64,

    /// Probability that an offspring is mutated.
    pub mutation_rate: f64,

    /// Number of best members copied unchanged into the next
    /// generation (0 to disable).
    pub elitism: usize,

    /// Parent-selection policy.
    pub selection: SelectionType,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            elitism: 1,
            selection: SelectionType::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_elitism(mut self, n: usize) -> Self {
        self.elitism = n;
        self
    }

    pub fn with_selection(mut self, selection: SelectionType) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(format!(
                "crossover_rate ({}) must be in [0, 1]",
                self.crossover_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate ({}) must be in [0, 1]",
                self.mutation_rate
            ));
        }
        if self.elitism >= self.population_size {
            return Err(format!(
                "elitism ({}) must be below population_size ({})",
                self.elitism, self.population_size
            ));
        }
        if let SelectionType::Tournament(0) = self.selection {
            return Err("tournament size must be at least 1".into());
        }
        Ok(())
    }
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Best individual observed across all generations.
    pub best: I,
    /// Fitness of [`best`](GaResult::best).
    pub best_fitness: I::Fitness,
    /// Generations actually elapsed (0 when the initial population
    /// already contained an optimum).
    pub generations: usize,
    /// Best-so-far fitness after initialization and after each
    /// generation, as `f64` for statistics.
    pub history: Vec<f64>,
}

/// Generic generational runner.
pub struct GaRunner;

impl GaRunner {
    /// Runs the generational loop for `problem` under `config`.
    ///
    /// The caller is expected to have validated both (see
    /// [`genetic_algorithm`] for the checked timetabling entry point).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| {
                let mut individual = problem.create_individual(&mut rng);
                let fitness = problem.evaluate(&individual);
                individual.set_fitness(fitness);
                individual
            })
            .collect();

        let (mut best, mut best_fitness) = Self::best_of(&population);
        let mut history = vec![best_fitness.to_f64()];
        let mut generations = 0;

        for generation in 1..=config.max_generations {
            if best_fitness.is_optimal() {
                break;
            }

            let mut next = Vec::with_capacity(config.population_size);
            if config.elitism > 0 {
                let mut ranked: Vec<&P::Individual> = population.iter().collect();
                ranked.sort_by(|a, b| {
                    a.fitness()
                        .partial_cmp(&b.fitness())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                next.extend(ranked.into_iter().take(config.elitism).cloned());
            }

            while next.len() < config.population_size {
                let (p1, p2) = config.selection.select_pair(&population, &mut rng);
                let offspring = if rng.random_bool(config.crossover_rate) {
                    problem.crossover(p1, p2, &mut rng)
                } else {
                    vec![p1.clone(), p2.clone()]
                };

                for mut child in offspring {
                    if next.len() == config.population_size {
                        break;
                    }
                    if rng.random_bool(config.mutation_rate) {
                        problem.mutate(&mut child, &mut rng);
                    }
                    let fitness = problem.evaluate(&child);
                    child.set_fitness(fitness);
                    next.push(child);
                }
            }
            population = next;
            generations = generation;

            let (gen_best, gen_best_fitness) = Self::best_of(&population);
            if gen_best_fitness < best_fitness {
                best = gen_best;
                best_fitness = gen_best_fitness;
            }
            history.push(best_fitness.to_f64());
            problem.on_generation(generation, best_fitness);

            if best_fitness.is_optimal() {
                break;
            }
        }

        GaResult {
            best,
            best_fitness,
            generations,
            history,
        }
    }

    fn best_of<I: Individual>(population: &[I]) -> (I, I::Fitness) {
        let mut best = &population[0];
        for individual in &population[1..] {
            if individual.fitness() < best.fitness() {
                best = individual;
            }
        }
        (best.clone(), best.fitness())
    }
}

/// Error from [`genetic_algorithm`].
#[derive(Debug, Clone, PartialEq)]
pub enum GaError {
    /// The configuration failed [`GaConfig::validate`].
    InvalidConfig(String),
    /// The classroom/course input failed
    /// [`validate_input`](crate::validation::validate_input).
    InvalidInput(Vec<ValidationError>),
}

impl std::fmt::Display for GaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GaError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            GaError::InvalidInput(errors) => {
                write!(f, "invalid input ({} error(s)):", errors.len())?;
                for e in errors {
                    write!(f, " {};", e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GaError {}

/// Searches for a conflict-free timetable over `courses` in `classrooms`.
///
/// Validates the configuration and the input eagerly — duplicate names,
/// rooms outside the roster, and unschedulable courses are reported
/// before any search — then evolves states for at most
/// `config.max_generations` generations, stopping early on a
/// conflict-free member.
///
/// The returned [`GaResult`] carries the best state observed; its
/// `best_fitness` may be nonzero, and the caller must check it.
pub fn genetic_algorithm(
    classrooms: Vec<Arc<Classroom>>,
    courses: Vec<Course>,
    config: &GaConfig,
) -> Result<GaResult<State>, GaError> {
    config.validate().map_err(GaError::InvalidConfig)?;
    validate_input(&classrooms, &courses).map_err(GaError::InvalidInput)?;

    let problem = TimetableProblem::new(classrooms, courses);
    Ok(GaRunner::run(&problem, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;
    use crate::validation::ValidationErrorKind;

    fn feasible_fixture() -> (Vec<Arc<Classroom>>, Vec<Course>) {
        let room_a = Classroom::shared("7606", 8, 16).unwrap();
        let room_b = Classroom::shared("7602", 8, 16).unwrap();
        let courses = vec![
            Course::new(
                "AI",
                2,
                7,
                15,
                vec![Arc::clone(&room_a), Arc::clone(&room_b)],
                [Day::Monday, Day::Tuesday],
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
        (vec![room_a, room_b], courses)
    }

    #[test]
    fn test_config_defaults_and_builders() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.elitism, 1);
        assert!(config.seed.is_none());
        config.validate().unwrap();

        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(20)
            .with_crossover_rate(0.7)
            .with_mutation_rate(0.3)
            .with_elitism(2)
            .with_seed(42);
        assert_eq!(config.population_size, 10);
        assert_eq!(config.seed, Some(42));
        config.validate().unwrap();
    }

    #[test]
    fn test_config_validation_errors() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
        assert!(GaConfig::default().with_elitism(100).validate().is_err());
        assert!(
            GaConfig::default()
                .with_selection(SelectionType::Tournament(0))
                .validate()
                .is_err()
        );
        // Builders clamp rates into [0, 1].
        let config = GaConfig::default().with_mutation_rate(1.5);
        assert_eq!(config.mutation_rate, 1.0);
        config.validate().unwrap();
    }

    #[test]
    fn test_two_course_run_reaches_zero_conflicts() {
        // Two rooms, two days, generous windows: conflict-free
        // assignments vastly outnumber colliding ones, and a budget of
        // 10 generations over 10 members is plenty.
        let (classrooms, courses) = feasible_fixture();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(10)
            .with_seed(42);

        let result = genetic_algorithm(classrooms, courses, &config).unwrap();
        assert_eq!(result.best_fitness, 0);
        assert_eq!(result.best.fitness_score(), 0);
        assert_eq!(result.best.len(), 2);
        for course in result.best.courses() {
            course.check_schedule().unwrap();
        }
    }

    #[test]
    fn test_result_reports_history_and_generations() {
        let (classrooms, courses) = feasible_fixture();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(10)
            .with_seed(7);

        let result = genetic_algorithm(classrooms, courses, &config).unwrap();
        assert!(result.generations <= 10);
        // One entry after initialization plus one per elapsed generation.
        assert_eq!(result.history.len(), result.generations + 1);
        // Best-so-far never worsens.
        assert!(result.history.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(*result.history.last().unwrap(), result.best_fitness as f64);
    }

    #[test]
    fn test_unsatisfiable_input_returns_best_effort() {
        // Three courses forced into one room, one day, one start: at
        // most one can hold the slot without clashing.
        let room = Classroom::shared("7606", 8, 10).unwrap();
        let courses: Vec<Course> = ["A", "B", "C"]
            .iter()
            .map(|name| {
                Course::new(*name, 2, 8, 10, vec![Arc::clone(&room)], [Day::Monday]).unwrap()
            })
            .collect();

        let config = GaConfig::default()
            .with_population_size(8)
            .with_max_generations(5)
            .with_seed(42);
        let result = genetic_algorithm(vec![room], courses, &config).unwrap();
        // All three pairs collide, in every state.
        assert_eq!(result.best_fitness, 3);
        assert_eq!(result.generations, 5);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let (classrooms, courses) = feasible_fixture();
        let config = GaConfig::default().with_population_size(0);

        let err = genetic_algorithm(classrooms, courses, &config).unwrap_err();
        assert!(matches!(err, GaError::InvalidConfig(_)));
    }

    #[test]
    fn test_infeasible_course_is_rejected_before_search() {
        let room = Classroom::shared("7606", 8, 10).unwrap();
        // Duration 5 cannot fit the [8, 10) window.
        let course = Course::new("X", 5, 8, 10, vec![Arc::clone(&room)], [Day::Monday]).unwrap();

        let err = genetic_algorithm(vec![room], vec![course], &GaConfig::default()).unwrap_err();
        match err {
            GaError::InvalidInput(errors) => {
                assert!(
                    errors
                        .iter()
                        .any(|e| e.kind == ValidationErrorKind::NoFeasibleWindow)
                );
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(10)
            .with_seed(42);

        let (classrooms, courses) = feasible_fixture();
        let first = genetic_algorithm(classrooms, courses, &config).unwrap();
        let (classrooms, courses) = feasible_fixture();
        let second = genetic_algorithm(classrooms, courses, &config).unwrap();

        assert_eq!(first.best_fitness, second.best_fitness);
        assert_eq!(first.generations, second.generations);
        assert_eq!(first.history, second.history);
    }
}
