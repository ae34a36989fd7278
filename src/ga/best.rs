//! Best-found record shared across fitness evaluations.
//!
//! The score and the chromosome it belongs to are stored together
//! behind one lock and only ever replaced together, so a reader can
//! never observe a score paired with another chromosome. An atomic copy
//! of the best score lets losing offers return without taking the lock.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Chromosome;

/// Highest-fitness chromosome observed so far.
#[derive(Debug)]
pub struct BestRecord {
    inner: Mutex<Option<BestEntry>>,
    /// Mirrors `inner`'s fitness; `i64::MIN` while empty.
    best_fitness: AtomicI64,
}

/// A committed (fitness, chromosome) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestEntry {
    /// Fitness of `chromosome`.
    pub fitness: i64,
    /// The best chromosome.
    pub chromosome: Chromosome,
}

impl Default for BestRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl BestRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
            best_fitness: AtomicI64::new(i64::MIN),
        }
    }

    /// Commits `chromosome` if `fitness` strictly beats the current best.
    ///
    /// The comparison and the write happen under the same lock. The
    /// chromosome is cloned only when it is committed. Returns whether
    /// the record changed.
    pub fn offer(&self, fitness: i64, chromosome: &Chromosome) -> bool {
        if self.lock_free_fitness().is_some_and(|best| best >= fitness) {
            return false;
        }
        let mut guard = self.lock();
        match guard.as_ref() {
            Some(best) if best.fitness >= fitness => false,
            _ => {
                *guard = Some(BestEntry {
                    fitness,
                    chromosome: chromosome.clone(),
                });
                self.best_fitness.store(fitness, Ordering::Release);
                true
            }
        }
    }

    /// Current best fitness, if anything was committed.
    pub fn fitness(&self) -> Option<i64> {
        self.lock().as_ref().map(|b| b.fitness)
    }

    /// Copy of the current best entry.
    pub fn snapshot(&self) -> Option<BestEntry> {
        self.lock().clone()
    }

    /// Consumes the record, returning the final entry.
    pub fn into_inner(self) -> Option<BestEntry> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_free_fitness(&self) -> Option<i64> {
        match self.best_fitness.load(Ordering::Acquire) {
            i64::MIN => None,
            f => Some(f),
        }
    }

    // The entry is replaced by a single move, so a poisoned lock still
    // holds a consistent pair.
    fn lock(&self) -> MutexGuard<'_, Option<BestEntry>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
