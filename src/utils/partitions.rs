use itertools::Itertools;

/// The indices of `0..n` missing from the sorted `indices`
pub fn complement(n: usize, indices: &[usize]) -> Vec<usize> {
    let mut chosen = indices.iter().copied().peekable();
    (0..n)
        .filter(|&i| {
            if chosen.peek() == Some(&i) {
                chosen.next();
                false
            } else {
                true
            }
        })
        .collect()
}

/// Every way to split `0..n` into an `m`-element part and its complement,
/// following the lexicographic order of the `m`-element part.
///
/// With `limit` set, only that many leading splits are produced.
pub fn split_pairs(
    n: usize,
    m: usize,
    limit: Option<u64>,
) -> impl Iterator<Item = (Vec<usize>, Vec<usize>)> {
    let take = limit.map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));
    (0..n).combinations(m).take(take).map(move |first| {
        let second = complement(n, &first);
        (first, second)
    })
}
