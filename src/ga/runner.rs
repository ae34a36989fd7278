//! Generational driver.
//!
//! # Lifecycle
//!
//! ```text
//! Seeded ──► Evolving ──► Concluded
//!   │          ▲   │
//!   │          └───┘ one generation per step
//!   └─────────────────► (perfect timetable in the initial population)
//! ```
//!
//! - **Seeded**: a random initial population is drawn and scored.
//! - **Evolving**: each step breeds a full replacement population
//!   (tournament selection, single-point crossover, mutation) and scores
//!   it. The scan of a generation stops at the first score of 0.
//! - **Concluded**: a perfect timetable was found, the generation budget
//!   ran out, or the cancel flag was raised between generations.
//!
//! Every strict improvement over the best-ever score is committed to a
//! [`BestRecord`]; the final result is read from it after the loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use super::operators::{crossover_pair, mutate, tournament_select};
use super::{BestRecord, Chromosome, FitnessEvaluator, GaConfig};
use crate::error::TimetableError;
use crate::models::{Catalog, Timetable};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A timetable with fitness 0 was found.
    PerfectFound,
    /// `max_generations` generations were bred.
    BudgetExhausted,
    /// The cancel flag was observed between generations.
    Cancelled,
}

#[derive(Debug)]
enum RunPhase {
    Seeded,
    Evolving,
    Concluded(StopReason),
}

/// Outcome of one generation scan.
struct GenerationScore {
    best_fitness: i64,
    found_perfect: bool,
}

/// Result of a timetabling run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best chromosome found over all generations.
    pub best: Chromosome,
    /// Fitness of `best` (0 = fully valid).
    pub best_fitness: i64,
    /// Generations bred after the initial population.
    pub generations: usize,
    /// Why the run ended.
    pub stop_reason: StopReason,
    /// Best fitness per scored population; index 0 is the initial one.
    pub fitness_history: Vec<i64>,
}

impl GaResult {
    /// Whether the best timetable is free of defects.
    pub fn found_perfect(&self) -> bool {
        self.best_fitness == 0
    }

    /// Resolves the best chromosome into a [`Timetable`].
    pub fn timetable(&self, evaluator: &FitnessEvaluator<'_>) -> Timetable {
        self.best.to_timetable(evaluator)
    }
}

/// Genetic timetabling over a fixed catalog.
///
/// # Example
/// ```
/// use u_timetable::ga::{GaConfig, TimetableGa};
/// use u_timetable::models::{Catalog, Class, Room, Teacher, TimeSlot, Weekday};
///
/// let catalog = Catalog::new()
///     .with_teacher(
///         Teacher::new("T1")
///             .with_subject("Mathematics")
///             .available_on_days(Weekday::WORKDAYS),
///     )
///     .with_room(Room::new("R101", 30))
///     .with_time_slot(TimeSlot::at(Weekday::Monday, (8, 0), (10, 0)))
///     .with_class(Class::new("Mathematics").with_capacity(25));
///
/// let ga = TimetableGa::new(&catalog, GaConfig::default().with_seed(1)).unwrap();
/// let result = ga.run();
/// assert!(result.found_perfect());
/// ```
pub struct TimetableGa<'a> {
    catalog: &'a Catalog,
    config: GaConfig,
    evaluator: FitnessEvaluator<'a>,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> TimetableGa<'a> {
    /// Validates the configuration and catalog and prepares a run.
    pub fn new(catalog: &'a Catalog, config: GaConfig) -> Result<Self, TimetableError> {
        config.validate()?;
        catalog.validate()?;
        let evaluator = FitnessEvaluator::new(catalog).with_conflict_weight(config.conflict_weight);
        Ok(Self {
            catalog,
            config,
            evaluator,
            cancel: None,
        })
    }

    /// Stops the run at the next generation boundary once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The run parameters.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The evaluator used for scoring.
    pub fn evaluator(&self) -> &FitnessEvaluator<'a> {
        &self.evaluator
    }

    /// Runs the search with an RNG seeded from `config.seed`.
    pub fn run(&self) -> GaResult {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    ///
    /// Breeding always happens on this RNG, so the sequence of
    /// populations depends only on the RNG state, whether or not
    /// scoring is parallel.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population = self.config.population_size,
            classes = self.catalog.class_count(),
            max_generations = self.config.max_generations,
        )
    )]
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> GaResult {
        let best = BestRecord::new();
        let mut fitness_history = Vec::with_capacity(self.config.max_generations + 1);
        let mut population = Vec::with_capacity(self.config.population_size);
        let mut generation = 0;
        let mut phase = RunPhase::Seeded;

        let stop_reason = loop {
            phase = match phase {
                RunPhase::Seeded => {
                    population.extend(
                        (0..self.config.population_size)
                            .map(|_| Chromosome::random(self.catalog, rng)),
                    );
                    let score = self.score_population(&population, &best, generation);
                    fitness_history.push(score.best_fitness);
                    debug!(best = score.best_fitness, "initial population scored");
                    if score.found_perfect {
                        RunPhase::Concluded(StopReason::PerfectFound)
                    } else {
                        RunPhase::Evolving
                    }
                }
                RunPhase::Evolving => {
                    if generation >= self.config.max_generations {
                        RunPhase::Concluded(StopReason::BudgetExhausted)
                    } else if self.is_cancelled() {
                        RunPhase::Concluded(StopReason::Cancelled)
                    } else {
                        population = self.next_generation(&population, rng);
                        generation += 1;
                        let score = self.score_population(&population, &best, generation);
                        fitness_history.push(score.best_fitness);
                        debug!(generation, best = score.best_fitness, "generation scored");
                        if score.found_perfect {
                            RunPhase::Concluded(StopReason::PerfectFound)
                        } else {
                            RunPhase::Evolving
                        }
                    }
                }
                RunPhase::Concluded(reason) => break reason,
            };
        };

        let entry = best
            .into_inner()
            .expect("initial population is always scored");
        info!(
            best_fitness = entry.fitness,
            generations = generation,
            ?stop_reason,
            "timetabling run concluded"
        );

        GaResult {
            best: entry.chromosome,
            best_fitness: entry.fitness,
            generations: generation,
            stop_reason,
            fitness_history,
        }
    }

    /// Breeds a replacement population of the configured size.
    ///
    /// Children are produced in complementary pairs. When the size is
    /// odd the second child of the last pair is discarded.
    fn next_generation<R: Rng>(&self, population: &[Chromosome], rng: &mut R) -> Vec<Chromosome> {
        let size = self.config.population_size;
        let tournament_size = self.config.tournament_size;
        let mut next = Vec::with_capacity(size);

        while next.len() < size {
            let p1 = tournament_select(population, tournament_size, &self.evaluator, rng);
            let p2 = tournament_select(population, tournament_size, &self.evaluator, rng);
            let (mut c1, mut c2) = crossover_pair(p1, p2, rng);
            mutate(&mut c1, self.catalog, self.config.mutation_rate, rng);
            mutate(&mut c2, self.catalog, self.config.mutation_rate, rng);

            next.push(c1);
            if next.len() < size {
                next.push(c2);
            }
        }

        next
    }

    fn score_population(
        &self,
        population: &[Chromosome],
        best: &BestRecord,
        generation: usize,
    ) -> GenerationScore {
        if self.config.parallel {
            self.score_parallel(population, best, generation)
        } else {
            self.score_sequential(population, best, generation)
        }
    }

    fn score_sequential(
        &self,
        population: &[Chromosome],
        best: &BestRecord,
        generation: usize,
    ) -> GenerationScore {
        let mut best_fitness: Option<i64> = None;
        for chromosome in population {
            let fitness = self.evaluator.evaluate(chromosome);
            if best_fitness.is_some_and(|b| fitness <= b) {
                continue;
            }
            best_fitness = Some(fitness);
            if best.offer(fitness, chromosome) {
                info!(generation, fitness, "new best timetable");
            }
            if fitness == 0 {
                return GenerationScore {
                    best_fitness: fitness,
                    found_perfect: true,
                };
            }
        }
        GenerationScore {
            best_fitness: best_fitness.unwrap_or(i64::MIN),
            found_perfect: false,
        }
    }

    // Once any worker finds a perfect timetable the remaining
    // individuals are skipped.
    fn score_parallel(
        &self,
        population: &[Chromosome],
        best: &BestRecord,
        generation: usize,
    ) -> GenerationScore {
        let perfect = AtomicBool::new(false);
        let best_fitness = population
            .par_iter()
            .filter_map(|chromosome| {
                if perfect.load(Ordering::Relaxed) {
                    return None;
                }
                let fitness = self.evaluator.evaluate(chromosome);
                if best.offer(fitness, chromosome) {
                    info!(generation, fitness, "new best timetable");
                }
                if fitness == 0 {
                    perfect.store(true, Ordering::Relaxed);
                }
                Some(fitness)
            })
            .max()
            .unwrap_or(i64::MIN);

        GenerationScore {
            best_fitness,
            found_perfect: perfect.into_inner(),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
