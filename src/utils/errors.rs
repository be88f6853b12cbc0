use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Number cannot be empty")]
    EmptyNumber,
    #[error("Not a valid integer: {0}")]
    InvalidNumber(String),
}
