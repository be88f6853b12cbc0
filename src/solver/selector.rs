use log::debug;

use crate::calculation::Calculation;

/// The closest calculations found for a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub target: i64,
    pub difference: u64,
    /// Every calculation at `difference` from the target, in the order found
    pub calculations: Vec<Calculation>,
}

impl Solution {
    pub fn is_exact(&self) -> bool {
        self.difference == 0
    }
}

/// Keep the calculations closest to `target`.
///
/// Returns `None` when there are no calculations at all.
pub fn select_best<'a, I>(calculations: I, target: i64) -> Option<Solution>
where
    I: IntoIterator<Item = &'a Calculation>,
{
    let mut best: Option<Solution> = None;
    let mut scanned = 0usize;

    for calculation in calculations {
        scanned += 1;
        let difference = calculation.value.abs_diff(target);
        match &mut best {
            Some(solution) if difference > solution.difference => {}
            Some(solution) if difference == solution.difference => {
                solution.calculations.push(calculation.clone());
            }
            _ => {
                best = Some(Solution {
                    target,
                    difference,
                    calculations: vec![calculation.clone()],
                });
            }
        }
    }

    debug!(
        "Scanned {} calculations, best difference {:?}",
        scanned,
        best.as_ref().map(|solution| solution.difference)
    );
    best
}
