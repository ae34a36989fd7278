//! Gene/chromosome encoding of a timetable.
//!
//! # Encoding
//!
//! A chromosome is a vector of genes, one per class in the catalog.
//! Gene `i` always describes class `i`; only its teacher, room, and
//! slot bindings evolve. Bindings are catalog indices, so a gene can
//! never reference an entity the catalog does not contain.
//!
//! Genes are `Copy`: a child produced by crossover owns its genes
//! outright and mutating it never writes through to a parent.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::FitnessEvaluator;
use crate::models::{Catalog, Timetable, TimetableEntry};

/// One class bound to a teacher, room, and time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gene {
    /// Index into `Catalog::classes` (equals the gene position).
    pub class: usize,
    /// Index into `Catalog::teachers`.
    pub teacher: usize,
    /// Index into `Catalog::rooms`.
    pub room: usize,
    /// Index into `Catalog::time_slots`.
    pub time_slot: usize,
}

/// A candidate timetable: one gene per catalog class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chromosome {
    /// Genes in class order.
    pub genes: Vec<Gene>,
}

impl Chromosome {
    /// Creates a chromosome from genes.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Creates a random chromosome.
    ///
    /// Each class independently draws a uniformly random teacher, room,
    /// and slot (with replacement). No qualification, availability, or
    /// conflict filtering is applied.
    ///
    /// The catalog must have at least one teacher, room, and slot.
    pub fn random<R: Rng>(catalog: &Catalog, rng: &mut R) -> Self {
        let genes = (0..catalog.class_count())
            .map(|class| Gene {
                class,
                teacher: rng.random_range(0..catalog.teachers.len()),
                room: rng.random_range(0..catalog.rooms.len()),
                time_slot: rng.random_range(0..catalog.time_slots.len()),
            })
            .collect();
        Self { genes }
    }

    /// Number of genes.
    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Validates the encoding against a catalog.
    ///
    /// True iff there is exactly one gene per class, gene `i` describes
    /// class `i`, and every binding indexes an existing catalog entry.
    pub fn is_well_formed(&self, catalog: &Catalog) -> bool {
        self.genes.len() == catalog.class_count()
            && self.genes.iter().enumerate().all(|(i, g)| {
                g.class == i
                    && g.teacher < catalog.teachers.len()
                    && g.room < catalog.rooms.len()
                    && g.time_slot < catalog.time_slots.len()
            })
    }

    /// Resolves the chromosome into a [`Timetable`].
    ///
    /// Entries are ordered by weekday, then start time, then class
    /// position. Fitness and violations are computed fresh.
    pub fn to_timetable(&self, evaluator: &FitnessEvaluator<'_>) -> Timetable {
        let catalog = evaluator.catalog();
        let mut entries: Vec<TimetableEntry> = self
            .genes
            .iter()
            .map(|g| {
                let teacher = &catalog.teachers[g.teacher];
                let room = &catalog.rooms[g.room];
                TimetableEntry {
                    class_index: g.class,
                    subject: catalog.classes[g.class].subject.clone(),
                    teacher_id: teacher.id.clone(),
                    teacher_name: teacher.name.clone(),
                    room_id: room.id.clone(),
                    room_capacity: room.capacity,
                    slot: catalog.time_slots[g.time_slot],
                }
            })
            .collect();
        entries.sort_by_key(|e| (e.slot.day, e.slot.window.start_min, e.class_index));

        Timetable {
            entries,
            violations: evaluator.violations(self),
            fitness: evaluator.evaluate(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Class, Room, Teacher, TimeSlot, Weekday};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with_teacher(
                Teacher::new("T1")
                    .with_name("Mr. Smith")
                    .with_subject("Mathematics")
                    .available_on_days(Weekday::WORKDAYS),
            )
            .with_teacher(
                Teacher::new("T2")
                    .with_name("Ms. Johnson")
                    .with_subject("History")
                    .available_on(Weekday::Tuesday),
            )
            .with_room(Room::new("R101", 30))
            .with_room(Room::new("R102", 20))
            .with_time_slot(TimeSlot::at(Weekday::Tuesday, (8, 0), (10, 0)))
            .with_time_slot(TimeSlot::at(Weekday::Monday, (10, 30), (11, 30)))
            .with_time_slot(TimeSlot::at(Weekday::Monday, (8, 0), (10, 0)))
            .with_class(Class::new("Mathematics").with_capacity(25))
            .with_class(Class::new("History").with_capacity(15))
            .with_class(Class::new("Mathematics").with_capacity(10))
    }

    #[test]
    fn test_random_chromosome() {
        let catalog = sample_catalog();
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = Chromosome::random(&catalog, &mut rng);

        assert_eq!(ch.len(), 3);
        assert!(ch.is_well_formed(&catalog));
        for (i, g) in ch.genes.iter().enumerate() {
            assert_eq!(g.class, i);
        }
    }

    #[test]
    fn test_random_draws_cover_catalog() {
        let catalog = sample_catalog();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen_slots = [false; 3];
        for _ in 0..200 {
            let ch = Chromosome::random(&catalog, &mut rng);
            for g in &ch.genes {
                seen_slots[g.time_slot] = true;
            }
        }
        assert!(seen_slots.iter().all(|s| *s));
    }

    #[test]
    fn test_malformed_chromosome() {
        let catalog = sample_catalog();
        let short = Chromosome::new(vec![Gene {
            class: 0,
            teacher: 0,
            room: 0,
            time_slot: 0,
        }]);
        assert!(!short.is_well_formed(&catalog));

        let out_of_range = Chromosome::new(
            (0..3)
                .map(|class| Gene {
                    class,
                    teacher: 5,
                    room: 0,
                    time_slot: 0,
                })
                .collect(),
        );
        assert!(!out_of_range.is_well_formed(&catalog));

        let misordered = Chromosome::new(
            [1, 0, 2]
                .into_iter()
                .map(|class| Gene {
                    class,
                    teacher: 0,
                    room: 0,
                    time_slot: 0,
                })
                .collect(),
        );
        assert!(!misordered.is_well_formed(&catalog));
    }

    #[test]
    fn test_to_timetable_orders_by_day_then_start() {
        let catalog = sample_catalog();
        let evaluator = FitnessEvaluator::new(&catalog);
        let ch = Chromosome::new(vec![
            Gene { class: 0, teacher: 0, room: 0, time_slot: 1 },
            Gene { class: 1, teacher: 1, room: 1, time_slot: 0 },
            Gene { class: 2, teacher: 0, room: 1, time_slot: 2 },
        ]);

        let tt = ch.to_timetable(&evaluator);
        let order: Vec<usize> = tt.entries.iter().map(|e| e.class_index).collect();
        assert_eq!(order, vec![2, 0, 1]);
        assert_eq!(tt.entries[0].teacher_name, "Mr. Smith");
        assert_eq!(tt.entries[2].room_id, "R102");
        assert_eq!(tt.fitness, 0);
        assert!(tt.is_valid());
    }
}
