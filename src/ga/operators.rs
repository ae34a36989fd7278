//! Genetic operators for timetable chromosomes.
//!
//! - [`tournament_select`]: best-of-k parent choice (sampling with replacement)
//! - [`crossover`] / [`crossover_pair`]: single-point crossover
//! - [`mutate`]: per-gene rebinding of one of teacher, room, or slot
//!
//! None of the operators filter for validity. Infeasible timetables are
//! expected in the population and are removed by selection pressure.

use rand::Rng;

use super::{Chromosome, FitnessEvaluator};
use crate::models::Catalog;

/// Binding rewritten by a gene mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationTarget {
    Teacher,
    Room,
    TimeSlot,
}

impl MutationTarget {
    const ALL: [MutationTarget; 3] = [
        MutationTarget::Teacher,
        MutationTarget::Room,
        MutationTarget::TimeSlot,
    ];

    fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Tournament selection.
///
/// Draws `tournament_size` individuals uniformly at random with
/// replacement, scores each fresh, and returns the one with the highest
/// fitness. Ties keep the earliest draw.
///
/// `population` must be non-empty and `tournament_size` at least 1.
pub fn tournament_select<'p, R: Rng>(
    population: &'p [Chromosome],
    tournament_size: usize,
    evaluator: &FitnessEvaluator<'_>,
    rng: &mut R,
) -> &'p Chromosome {
    debug_assert!(!population.is_empty());
    debug_assert!(tournament_size >= 1);

    let mut best = rng.random_range(0..population.len());
    let mut best_fitness = evaluator.evaluate(&population[best]);

    for _ in 1..tournament_size {
        let idx = rng.random_range(0..population.len());
        let fitness = evaluator.evaluate(&population[idx]);
        if fitness > best_fitness {
            best = idx;
            best_fitness = fitness;
        }
    }

    &population[best]
}

/// Single-point crossover at a fixed cut.
///
/// The child takes `first`'s genes before `cut` and `second`'s genes
/// from `cut` on.
pub fn crossover_at(first: &Chromosome, second: &Chromosome, cut: usize) -> Chromosome {
    debug_assert_eq!(first.len(), second.len());
    let cut = cut.min(first.len());
    let mut genes = Vec::with_capacity(first.len());
    genes.extend_from_slice(&first.genes[..cut]);
    genes.extend_from_slice(&second.genes[cut..]);
    Chromosome::new(genes)
}

/// Single-point crossover with a uniformly random cut in `[0, len)`.
pub fn crossover<R: Rng>(first: &Chromosome, second: &Chromosome, rng: &mut R) -> Chromosome {
    if first.is_empty() {
        return first.clone();
    }
    let cut = rng.random_range(0..first.len());
    crossover_at(first, second, cut)
}

/// Produces two complementary children from one random cut.
///
/// Child 1 is `p1` before the cut and `p2` after; child 2 swaps roles.
pub fn crossover_pair<R: Rng>(
    p1: &Chromosome,
    p2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    if p1.is_empty() {
        return (p1.clone(), p2.clone());
    }
    let cut = rng.random_range(0..p1.len());
    (crossover_at(p1, p2, cut), crossover_at(p2, p1, cut))
}

/// Per-gene mutation.
///
/// Each gene independently, with probability `mutation_rate`, has one of
/// its teacher, room, or slot (chosen uniformly) replaced by a uniformly
/// random catalog entry. The class binding never changes.
///
/// Returns the number of genes mutated.
pub fn mutate<R: Rng>(
    chromosome: &mut Chromosome,
    catalog: &Catalog,
    mutation_rate: f64,
    rng: &mut R,
) -> usize {
    let mut mutated = 0;
    for gene in &mut chromosome.genes {
        if rng.random::<f64>() >= mutation_rate {
            continue;
        }
        match MutationTarget::random(rng) {
            MutationTarget::Teacher => gene.teacher = rng.random_range(0..catalog.teachers.len()),
            MutationTarget::Room => gene.room = rng.random_range(0..catalog.rooms.len()),
            MutationTarget::TimeSlot => {
                gene.time_slot = rng.random_range(0..catalog.time_slots.len())
            }
        }
        mutated += 1;
    }
    mutated
}
