pub mod constants;
mod config;
mod core;
mod engine;
mod errors;
mod partitions;
mod selector;
mod table;

pub use config::SolverConfig;
pub use core::CountdownSolver;
pub use engine::calculate_group;
pub use errors::SolverError;
pub use partitions::partition_group;
pub use selector::{Solution, select_best};
pub use table::{Group, GroupTable, Partition, SubsetKey};
