//! Core trait definitions for the genetic search engine.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generic generational loop in
//! [`runner`](super::runner) and the timetabling problem definition.
//! Lower fitness is better (minimization); conflict counts bottom out
//! at zero, the conflict-free optimum.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimization).
///
/// Built-in implementations exist for `u32` (conflict counts, optimal
/// at zero) and `f64` (continuous objectives, no known optimum).
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for initial/unevaluated individuals.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;

    /// Whether this fitness cannot be improved upon.
    ///
    /// The runner stops as soon as any member reaches an optimal
    /// fitness. Defaults to `false` (run the full budget).
    fn is_optimal(self) -> bool {
        false
    }
}

impl Fitness for u32 {
    fn worst() -> Self {
        u32::MAX
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    /// Zero conflicts is the optimum.
    fn is_optimal(self) -> bool {
        self == 0
    }
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The runner calls
/// [`GaProblem::evaluate`] to compute fitness, then stores it via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    ///
    /// Called by the runner after evaluation.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// Implementations plug domain-specific logic into the generic runner:
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents
/// 4. **Mutation**: how to perturb an individual
///
/// The engine is single-threaded and synchronous; evaluation is a pure
/// computation over in-memory structures.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    ///
    /// Called during population initialization. The implementation should
    /// produce a valid (but not necessarily good) solution.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Lower fitness values are considered better (minimization).
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one or two offspring by recombining two parents.
    ///
    /// Returns a `Vec` of 1 or 2 children. The runner handles sizing.
    ///
    /// The default implementation clones parent1 (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the current best fitness.
    ///
    /// Useful for logging or adaptive parameter control. The default
    /// implementation is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_fitness() {
        assert_eq!(u32::worst(), u32::MAX);
        assert_eq!(7u32.to_f64(), 7.0);
        assert!(0u32.is_optimal());
        assert!(!1u32.is_optimal());
    }

    #[test]
    fn test_f64_fitness() {
        assert_eq!(f64::worst(), f64::INFINITY);
        assert_eq!(2.5f64.to_f64(), 2.5);
        // Continuous objectives have no known optimum.
        assert!(!0.0f64.is_optimal());
    }
}
