//! Genetic search for class timetables.
//!
//! # Encoding
//!
//! A [`Chromosome`] holds one [`Gene`] per catalog class, in catalog
//! order. A gene binds its class to a teacher, room, and time slot by
//! catalog index. Only the bindings evolve; the class at each position
//! is fixed for the whole run.
//!
//! # Submodules
//!
//! - [`operators`]: tournament selection, single-point crossover, mutation
//!
//! # Flow
//!
//! [`TimetableGa`] seeds a random population, scores it with a
//! [`FitnessEvaluator`], and breeds replacement generations until a
//! defect-free timetable appears or the generation budget runs out.
//! The best chromosome seen is kept in a [`BestRecord`].

mod best;
mod chromosome;
mod config;
mod fitness;
pub mod operators;
mod runner;

pub use best::{BestEntry, BestRecord};
pub use chromosome::{Chromosome, Gene};
pub use config::{ConfigError, GaConfig};
pub use fitness::{
    FitnessEvaluator, DEFAULT_CONFLICT_WEIGHT, DEFECT_PENALTY, MAX_CONFLICT_WEIGHT,
};
pub use operators::{crossover, crossover_at, crossover_pair, mutate, tournament_select};
pub use runner::{GaResult, StopReason, TimetableGa};
