use crate::solver::constants::DEFAULT_MAX_NUMBERS;

/// Configuration for building the group table
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Resolve the groups of one size concurrently with rayon
    pub parallel: bool,
    /// Largest source count accepted by `CountdownSolver::try_solve`
    pub max_numbers: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            max_numbers: DEFAULT_MAX_NUMBERS,
        }
    }
}
