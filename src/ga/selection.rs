//! Parent selection policies.
//!
//! Selection is a pluggable policy rather than a hard-coded scheme: the
//! exact strategy biases the search but is not part of the caller
//! contract. All policies favor lower fitness (minimization).

use rand::Rng;

use super::types::{Fitness, Individual};

/// Runtime-selectable parent-selection policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionType {
    /// Draw `k` members uniformly at random (with replacement) and keep
    /// the fittest. `k = 2` is the classic binary tournament.
    Tournament(usize),
    /// Fitness-proportionate draw with minimization weights
    /// `(worst_in_population - fitness) + 1`.
    RouletteWheel,
}

impl Default for SelectionType {
    fn default() -> Self {
        SelectionType::Tournament(2)
    }
}

impl SelectionType {
    /// Selects one parent from a non-empty population.
    pub fn select<'a, I: Individual, R: Rng>(&self, population: &'a [I], rng: &mut R) -> &'a I {
        debug_assert!(!population.is_empty(), "selection over an empty population");
        match *self {
            SelectionType::Tournament(k) => tournament(population, k.max(1), rng),
            SelectionType::RouletteWheel => roulette(population, rng),
        }
    }

    /// Selects two parents independently.
    ///
    /// The parents may coincide; crossover handles identical parents
    /// gracefully (the offspring are copies).
    pub fn select_pair<'a, I: Individual, R: Rng>(
        &self,
        population: &'a [I],
        rng: &mut R,
    ) -> (&'a I, &'a I) {
        (self.select(population, rng), self.select(population, rng))
    }
}

fn tournament<'a, I: Individual, R: Rng>(population: &'a [I], k: usize, rng: &mut R) -> &'a I {
    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..k {
        let challenger = &population[rng.random_range(0..population.len())];
        if challenger.fitness() < best.fitness() {
            best = challenger;
        }
    }
    best
}

fn roulette<'a, I: Individual, R: Rng>(population: &'a [I], rng: &mut R) -> &'a I {
    let worst = population
        .iter()
        .map(|i| i.fitness().to_f64())
        .fold(f64::NEG_INFINITY, f64::max);

    // Minimization: weight = (worst - fitness) + 1, so the worst member
    // still keeps a nonzero slice of the wheel.
    let weights: Vec<f64> = population
        .iter()
        .map(|i| (worst - i.fitness().to_f64()) + 1.0)
        .collect();
    let total: f64 = weights.iter().sum();

    let mut spin = rng.random_range(0.0..total);
    for (individual, weight) in population.iter().zip(&weights) {
        if spin < *weight {
            return individual;
        }
        spin -= weight;
    }
    // Floating-point slack lands on the last member.
    &population[population.len() - 1]
}
