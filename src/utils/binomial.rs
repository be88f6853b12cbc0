use log::debug;
use std::collections::HashMap;

/// Exact binomial coefficient `C(n, k)`, or 0 when `k > n`
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);

    // each partial product is itself a binomial coefficient, so the division is exact
    let mut product: u64 = 1;
    for (numerator, denominator) in (n + 1 - k..=n).rev().zip(1..=k) {
        product = product * numerator as u64 / denominator as u64;
    }
    product
}

/// Memoized half binomial counts, scoped to a single table build.
///
/// Splitting a group of even size `n` into two halves of size `n / 2` would
/// produce each split twice, once as its mirror. Taking only the first
/// `C(n, n/2) / 2` lexicographic combinations keeps exactly one of each.
#[derive(Debug, Default)]
pub struct PairCountCache {
    cache: HashMap<(usize, usize), Option<u64>>,
}

impl PairCountCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `C(n, k) / 2` for even `n`, `None` for odd `n` where no split is its own mirror
    pub fn half_binomial(&mut self, n: usize, k: usize) -> Option<u64> {
        *self.cache.entry((n, k)).or_insert_with(|| {
            let count = if n % 2 == 1 {
                None
            } else {
                Some(binomial(n, k) / 2)
            };
            debug!("Half binomial for ({}, {}) is {:?}", n, k, count);
            count
        })
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
