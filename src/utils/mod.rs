//! Utils module split into submodules

mod binomial;
mod errors;
mod partitions;
mod validation;

pub use binomial::{PairCountCache, binomial};
pub use errors::UtilsError;
pub use partitions::{complement, split_pairs};
pub use validation::{parse_number, parse_numbers};
