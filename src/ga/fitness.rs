//! Penalty-based timetable fitness.
//!
//! Fitness is a non-positive integer: a timetable without defects scores
//! exactly 0 and every defect subtracts points. Higher is better.
//!
//! # Penalties
//!
//! | Defect | Scope | Points |
//! |--------|-------|--------|
//! | Teacher conflict (same teacher, overlapping slots) | ordered pair | `conflict_weight` |
//! | Room conflict (same room, overlapping slots) | ordered pair | `conflict_weight` |
//! | Unqualified teacher | gene | 1 |
//! | Room too small | gene | 1 |
//! | Teacher unavailable on the slot's weekday | gene | 1 |
//!
//! Conflicts are scanned over ordered pairs `(i, j), i != j`, so every
//! conflicting pair is penalized twice. Scores are comparable only
//! between evaluators sharing the same `conflict_weight`, which must lie
//! in `1..=MAX_CONFLICT_WEIGHT`. Penalties saturate at `i64::MIN`.

use crate::models::{Catalog, Violation, ViolationType};

use super::{Chromosome, Gene};

/// Default per-pair conflict penalty.
pub const DEFAULT_CONFLICT_WEIGHT: i64 = 20;

/// Largest accepted per-pair conflict penalty.
pub const MAX_CONFLICT_WEIGHT: i64 = 1_000_000;

/// Per-gene defect penalty.
pub const DEFECT_PENALTY: i64 = 1;

/// Scores chromosomes against a catalog.
///
/// Stateless apart from its configuration: evaluating the same
/// chromosome twice always yields the same score.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    catalog: &'a Catalog,
    conflict_weight: i64,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator with [`DEFAULT_CONFLICT_WEIGHT`].
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            conflict_weight: DEFAULT_CONFLICT_WEIGHT,
        }
    }

    /// Sets the per-pair conflict penalty.
    ///
    /// A weight below 1 would let conflicts go unpunished or raise the
    /// score; [`GaConfig::validate`](super::GaConfig::validate) rejects it.
    pub fn with_conflict_weight(mut self, weight: i64) -> Self {
        debug_assert!(weight >= 1, "conflict weight must be positive, got {weight}");
        self.conflict_weight = weight;
        self
    }

    /// The catalog this evaluator scores against.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The per-pair conflict penalty.
    pub fn conflict_weight(&self) -> i64 {
        self.conflict_weight
    }

    /// Computes the fitness of a chromosome (0 = no defects).
    ///
    /// The chromosome must be well-formed for this catalog.
    pub fn evaluate(&self, chromosome: &Chromosome) -> i64 {
        debug_assert!(chromosome.is_well_formed(self.catalog));
        let genes = &chromosome.genes;
        let mut fitness: i64 = 0;

        for (i, g1) in genes.iter().enumerate() {
            for (j, g2) in genes.iter().enumerate() {
                if i == j || !self.slots_overlap(g1, g2) {
                    continue;
                }
                if g1.teacher == g2.teacher {
                    fitness = fitness.saturating_sub(self.conflict_weight);
                }
                if g1.room == g2.room {
                    fitness = fitness.saturating_sub(self.conflict_weight);
                }
            }

            if !self.is_qualified(g1) {
                fitness = fitness.saturating_sub(DEFECT_PENALTY);
            }
            if !self.room_fits(g1) {
                fitness = fitness.saturating_sub(DEFECT_PENALTY);
            }
            if !self.is_available(g1) {
                fitness = fitness.saturating_sub(DEFECT_PENALTY);
            }
        }

        fitness
    }

    /// Lists every defect of a chromosome.
    ///
    /// Each conflicting pair is reported once with the doubled penalty
    /// it incurs, so the penalties always sum to `-evaluate(chromosome)`.
    pub fn violations(&self, chromosome: &Chromosome) -> Vec<Violation> {
        let catalog = self.catalog;
        let genes = &chromosome.genes;
        let mut violations = Vec::new();

        for (i, g1) in genes.iter().enumerate() {
            for (j, g2) in genes.iter().enumerate().skip(i + 1) {
                if !self.slots_overlap(g1, g2) {
                    continue;
                }
                let slot = &catalog.time_slots[g1.time_slot];
                if g1.teacher == g2.teacher {
                    violations.push(Violation::new(
                        ViolationType::TeacherConflict,
                        vec![i, j],
                        format!(
                            "Teacher '{}' double-booked on {}",
                            catalog.teachers[g1.teacher].id, slot
                        ),
                        self.conflict_weight.saturating_mul(2),
                    ));
                }
                if g1.room == g2.room {
                    violations.push(Violation::new(
                        ViolationType::RoomConflict,
                        vec![i, j],
                        format!(
                            "Room '{}' double-booked on {}",
                            catalog.rooms[g1.room].id, slot
                        ),
                        self.conflict_weight.saturating_mul(2),
                    ));
                }
            }

            let class = &catalog.classes[g1.class];
            let teacher = &catalog.teachers[g1.teacher];
            let room = &catalog.rooms[g1.room];
            if !self.is_qualified(g1) {
                violations.push(Violation::new(
                    ViolationType::UnqualifiedTeacher,
                    vec![i],
                    format!("Teacher '{}' cannot teach {}", teacher.id, class.subject),
                    DEFECT_PENALTY,
                ));
            }
            if !self.room_fits(g1) {
                violations.push(Violation::new(
                    ViolationType::CapacityExceeded,
                    vec![i],
                    format!(
                        "Room '{}' seats {} but {} needs {}",
                        room.id, room.capacity, class.subject, class.capacity
                    ),
                    DEFECT_PENALTY,
                ));
            }
            if !self.is_available(g1) {
                violations.push(Violation::new(
                    ViolationType::TeacherUnavailable,
                    vec![i],
                    format!(
                        "Teacher '{}' does not work on {}",
                        teacher.id, catalog.time_slots[g1.time_slot].day
                    ),
                    DEFECT_PENALTY,
                ));
            }
        }

        violations
    }

    #[inline]
    fn slots_overlap(&self, a: &Gene, b: &Gene) -> bool {
        let slots = &self.catalog.time_slots;
        slots[a.time_slot].overlaps(&slots[b.time_slot])
    }

    #[inline]
    fn is_qualified(&self, gene: &Gene) -> bool {
        let subject = &self.catalog.classes[gene.class].subject;
        self.catalog.teachers[gene.teacher].is_qualified_for(subject)
    }

    #[inline]
    fn room_fits(&self, gene: &Gene) -> bool {
        let required = self.catalog.classes[gene.class].capacity;
        self.catalog.rooms[gene.room].fits(required)
    }

    #[inline]
    fn is_available(&self, gene: &Gene) -> bool {
        let day = self.catalog.time_slots[gene.time_slot].day;
        self.catalog.teachers[gene.teacher].is_available_on(day)
    }
}
