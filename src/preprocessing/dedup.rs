//! Exact duplicate removal.

use std::hash::Hash;

use ahash::AHashSet;

/// Drop rows equal to an earlier row, keeping the first occurrence and the
/// original order of the survivors.
///
/// ```
/// use spamprep::preprocessing::dedup::deduplicate;
///
/// assert_eq!(deduplicate(vec!["A", "B", "A"]), vec!["A", "B"]);
/// ```
pub fn deduplicate<T: Eq + Hash>(records: Vec<T>) -> Vec<T> {
    let keep: Vec<bool> = {
        let mut seen = AHashSet::with_capacity(records.len());
        records.iter().map(|record| seen.insert(record)).collect()
    };

    records
        .into_iter()
        .zip(keep)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect()
}
