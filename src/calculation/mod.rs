//! Calculation module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod ops;

pub use ast::Calculation;
pub use errors::CalculationError;
pub use eval::{evaluate, literals};
pub use ops::{Operation, operations};

#[cfg(test)]
mod tests;
