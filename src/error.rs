//! Crate error type.

use crate::ga::ConfigError;
use crate::validation::ValidationError;

/// Reasons a timetabling run is refused before it starts.
///
/// Exhausting the generation budget without a defect-free timetable is
/// not an error; it is reported through `GaResult`.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("invalid catalog: {}", format_errors(.0))]
    InvalidCatalog(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for TimetableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        TimetableError::InvalidCatalog(errors)
    }
}
