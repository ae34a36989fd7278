//! Run parameters for the timetabling GA.

use serde::{Deserialize, Serialize};

use super::fitness::{DEFAULT_CONFLICT_WEIGHT, MAX_CONFLICT_WEIGHT};

/// Genetic search parameters.
///
/// Deserializes with defaults for missing fields, so a caller-side
/// config file only needs to name what it overrides.
///
/// # Example
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_max_generations(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation. Prefer even sizes: with an odd size
    /// the last breeding step keeps only one of its two children.
    pub population_size: usize,
    /// Individuals drawn per tournament.
    pub tournament_size: usize,
    /// Per-gene mutation probability in `[0, 1]`.
    pub mutation_rate: f64,
    /// Generations to breed after the initial population.
    pub max_generations: usize,
    /// Penalty per ordered conflicting pair, in `1..=MAX_CONFLICT_WEIGHT`.
    pub conflict_weight: i64,
    /// RNG seed (`None` = seed from OS entropy).
    pub seed: Option<u64>,
    /// Score each generation on the rayon thread pool.
    pub parallel: bool,
}

/// Rejected run parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("tournament size must be at least 1")]
    EmptyTournament,
    #[error("mutation rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
    #[error("conflict weight must be at least 1, got {0}")]
    NonPositiveConflictWeight(i64),
    #[error("conflict weight must be at most {max}, got {0}", max = MAX_CONFLICT_WEIGHT)]
    ConflictWeightTooLarge(i64),
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            tournament_size: 3,
            mutation_rate: 0.05,
            max_generations: 100,
            conflict_weight: DEFAULT_CONFLICT_WEIGHT,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the conflict penalty.
    pub fn with_conflict_weight(mut self, weight: i64) -> Self {
        self.conflict_weight = weight;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the parameters, reporting the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.tournament_size < 1 {
            return Err(ConfigError::EmptyTournament);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        if self.conflict_weight < 1 {
            return Err(ConfigError::NonPositiveConflictWeight(self.conflict_weight));
        }
        if self.conflict_weight > MAX_CONFLICT_WEIGHT {
            return Err(ConfigError::ConflictWeightTooLarge(self.conflict_weight));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.conflict_weight, 20);
        assert_eq!(config.tournament_size, 3);
    }

    #[test]
    fn test_rejects_small_population() {
        let err = GaConfig::default().with_population_size(1).validate();
        assert_eq!(err, Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_rejects_empty_tournament() {
        let err = GaConfig::default().with_tournament_size(0).validate();
        assert_eq!(err, Err(ConfigError::EmptyTournament));
    }

    #[test]
    fn test_rejects_mutation_rate_out_of_range() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let err = GaConfig::default().with_mutation_rate(rate).validate();
            assert!(matches!(err, Err(ConfigError::MutationRateOutOfRange(_))));
        }
        assert!(GaConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_conflict_weight() {
        for weight in [-1, 0] {
            let err = GaConfig::default().with_conflict_weight(weight).validate();
            assert_eq!(err, Err(ConfigError::NonPositiveConflictWeight(weight)));
        }
        assert!(GaConfig::default().with_conflict_weight(1).validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_conflict_weight() {
        let err = GaConfig::default().with_conflict_weight(i64::MAX).validate();
        assert_eq!(err, Err(ConfigError::ConflictWeightTooLarge(i64::MAX)));
        let max = GaConfig::default().with_conflict_weight(MAX_CONFLICT_WEIGHT);
        assert!(max.validate().is_ok());
    }

    #[test]
    fn test_tournament_may_exceed_population() {
        let config = GaConfig::default()
            .with_population_size(2)
            .with_tournament_size(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: GaConfig =
            serde_json::from_str(r#"{"population_size": 50, "seed": 7}"#).unwrap();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tournament_size, 3);
        assert!(!config.parallel);
    }
}
