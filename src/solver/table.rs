use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::calculation::Calculation;
use crate::solver::config::SolverConfig;
use crate::solver::engine::calculate_group;
use crate::solver::partitions::partition_group;
use crate::utils::PairCountCache;

/// The values of a chosen subset of the numbers, in their original order.
///
/// Subsets drawn from different positions that hold the same values in the
/// same order share one key, and so one group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubsetKey(Vec<i64>);

impl SubsetKey {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sub-key made of the values at the sorted `indices`
    pub fn select(&self, indices: &[usize]) -> SubsetKey {
        SubsetKey(indices.iter().filter_map(|&i| self.0.get(i).copied()).collect())
    }
}

impl fmt::Display for SubsetKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

/// An unordered split of a group into two complementary smaller groups, held by key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// The larger half, or either half when both have the same size
    pub first: SubsetKey,
    pub second: SubsetKey,
}

/// Everything computed for one subset key
#[derive(Debug, Clone)]
pub struct Group {
    pub key: SubsetKey,
    pub partitions: Vec<Partition>,
    pub calculations: Vec<Calculation>,
}

impl Group {
    pub fn size(&self) -> usize {
        self.key.len()
    }
}

/// Flat table of groups, built bottom-up by subset size.
///
/// A group only ever refers to groups of smaller size, and only through
/// their keys.
#[derive(Debug, Default)]
pub struct GroupTable {
    groups: Vec<Group>,
    index: HashMap<SubsetKey, usize>,
}

impl GroupTable {
    pub fn build(numbers: &[i64], config: &SolverConfig) -> Self {
        info!(
            "Building group table for {} numbers ({})",
            numbers.len(),
            if config.parallel { "parallel" } else { "sequential" }
        );

        let mut table = GroupTable::default();
        let mut pair_counts = PairCountCache::new();
        let source = SubsetKey::new(numbers.to_vec());

        for size in 1..=numbers.len() {
            let keys = table.new_keys_of_size(&source, size);
            let limit = pair_counts.half_binomial(size, size / 2);
            debug!(
                "Resolving {} groups of size {} (split limit {:?})",
                keys.len(),
                size,
                limit
            );

            // groups of one size only read smaller groups, already in the table
            let groups: Vec<Group> = if config.parallel {
                keys.into_par_iter()
                    .map(|key| table.resolve(key, limit))
                    .collect()
            } else {
                keys.into_iter()
                    .map(|key| table.resolve(key, limit))
                    .collect()
            };

            for group in groups {
                table.insert(group);
            }
        }

        info!(
            "Built group table: {} groups, {} calculations",
            table.len(),
            table.calculation_count()
        );
        table
    }

    /// Distinct keys of `size` values drawn from `source` that are not yet in the table
    fn new_keys_of_size(&self, source: &SubsetKey, size: usize) -> Vec<SubsetKey> {
        let mut seen = HashSet::new();
        (0..source.len())
            .combinations(size)
            .map(|indices| source.select(&indices))
            .filter(|key| !self.index.contains_key(key) && seen.insert(key.clone()))
            .collect()
    }

    fn resolve(&self, key: SubsetKey, limit: Option<u64>) -> Group {
        let partitions = partition_group(&key, limit);
        let calculations = calculate_group(&key, &partitions, self);
        debug!(
            "Group {}: {} partitions, {} calculations",
            key,
            partitions.len(),
            calculations.len()
        );
        Group {
            key,
            partitions,
            calculations,
        }
    }

    fn insert(&mut self, group: Group) {
        if !self.index.contains_key(&group.key) {
            self.index.insert(group.key.clone(), self.groups.len());
            self.groups.push(group);
        }
    }

    pub fn get(&self, key: &SubsetKey) -> Option<&Group> {
        self.index.get(key).and_then(|&i| self.groups.get(i))
    }

    pub fn contains(&self, key: &SubsetKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in the order they were built
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn groups_of_size(&self, size: usize) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(move |group| group.size() == size)
    }

    /// Every calculation of every group, in build order
    pub fn walk(&self) -> impl Iterator<Item = &Calculation> {
        self.groups.iter().flat_map(|group| group.calculations.iter())
    }

    pub fn calculation_count(&self) -> usize {
        self.groups.iter().map(|group| group.calculations.len()).sum()
    }
}
