use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Too many numbers: {count} given, at most {max} allowed")]
    TooManyNumbers { count: usize, max: usize },
    #[error("Utils error: {0}")]
    Utils(#[from] UtilsError),
}
