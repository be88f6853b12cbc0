use itertools::iproduct;

use crate::calculation::Calculation;
use crate::solver::table::{GroupTable, Partition, SubsetKey};

/// The calculations reachable from `key`: the bare number for a singleton,
/// otherwise every admitted combination of the two halves of every partition
pub fn calculate_group(
    key: &SubsetKey,
    partitions: &[Partition],
    table: &GroupTable,
) -> Vec<Calculation> {
    if let [number] = key.values() {
        return vec![Calculation::singleton(*number)];
    }

    let mut calculations = Vec::new();
    for partition in partitions {
        // both halves are strictly smaller subsequences, always in the table by now
        let halves = (table.get(&partition.first), table.get(&partition.second));
        let (Some(first), Some(second)) = halves else {
            continue;
        };
        for (a, b) in iproduct!(&first.calculations, &second.calculations) {
            calculations.extend(Calculation::combine(a, b));
        }
    }
    calculations
}
