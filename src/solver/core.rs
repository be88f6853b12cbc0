use log::{info, warn};

use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::selector::{Solution, select_best};
use crate::solver::table::GroupTable;

/// Main solver for finding the calculations closest to a target value
pub struct CountdownSolver {
    config: SolverConfig,
}

impl CountdownSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Resolve every distinct subset of `numbers`, smallest first
    pub fn build_table(&self, numbers: &[i64]) -> GroupTable {
        GroupTable::build(numbers, &self.config)
    }

    /// Find the calculations closest to `target` over any non-empty subset of `numbers`.
    ///
    /// Returns `None` when `numbers` is empty and there is nothing to calculate.
    pub fn solve(&self, target: i64, numbers: &[i64]) -> Option<Solution> {
        info!("Searching for {} using numbers {:?}", target, numbers);

        let table = self.build_table(numbers);
        let solution = select_best(table.walk(), target);

        match &solution {
            Some(found) => info!(
                "Closest difference {} with {} calculations",
                found.difference,
                found.calculations.len()
            ),
            None => warn!("No calculations to choose from"),
        }
        solution
    }

    /// Like [`CountdownSolver::solve`], but refuses more numbers than the configuration allows.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::TooManyNumbers`] when `numbers` exceeds `max_numbers`.
    pub fn try_solve(
        &self,
        target: i64,
        numbers: &[i64],
    ) -> Result<Option<Solution>, SolverError> {
        if numbers.len() > self.config.max_numbers {
            warn!(
                "Refusing {} numbers, at most {} allowed",
                numbers.len(),
                self.config.max_numbers
            );
            return Err(SolverError::TooManyNumbers {
                count: numbers.len(),
                max: self.config.max_numbers,
            });
        }
        Ok(self.solve(target, numbers))
    }
}

impl Default for CountdownSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
