use std::collections::HashSet;

use crate::solver::table::{Partition, SubsetKey};
use crate::utils::split_pairs;

/// Every complementary pair of smaller groups that `key` splits into, each once.
///
/// Split sizes run from the midpoint up, so a split never reappears as its
/// mirror at the complementary size. At an even midpoint the split is its own
/// mirror size and only the first `limit` lexicographic splits are taken.
/// Splits whose larger half repeats an earlier value tuple are skipped.
///
/// Both halves are subsequences of `key`, so their groups exist once every
/// smaller size has been built.
pub fn partition_group(key: &SubsetKey, limit: Option<u64>) -> Vec<Partition> {
    let size = key.len();
    if size < 2 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut partitions = Vec::new();

    for m in (size + 1) / 2..size {
        let bound = if 2 * m == size { limit } else { None };
        for (first_indices, second_indices) in split_pairs(size, m, bound) {
            let first = key.select(&first_indices);
            if !seen.insert(first.clone()) {
                continue;
            }
            let second = key.select(&second_indices);
            partitions.push(Partition { first, second });
        }
    }

    partitions
}
