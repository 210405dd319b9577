//! Seeded train/test partitioning.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{Result, SpamprepError};

/// Shuffle `records` with a seeded RNG and split them into `(train, test)`.
///
/// The test partition gets `ceil(test_size * n)` rows and the train partition
/// the rest; both must end up non-empty. Rows keep their shuffled order
/// within each partition. The same seed always yields the same partition.
///
/// ```
/// use spamprep::dataset::splitter::train_test_split;
///
/// let rows: Vec<u32> = (0..10).collect();
/// let (train, test) = train_test_split(rows, 0.2, 2).unwrap();
///
/// assert_eq!((train.len(), test.len()), (8, 2));
/// ```
pub fn train_test_split<T>(records: Vec<T>, test_size: f64, seed: u64) -> Result<(Vec<T>, Vec<T>)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(SpamprepError::config(format!(
            "test_size must be in (0, 1), got {test_size}"
        )));
    }

    let n = records.len();
    let n_test = (test_size * n as f64).ceil() as usize;
    let n_train = n.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(SpamprepError::config(format!(
            "test_size {test_size} on {n} records leaves an empty partition"
        )));
    }

    let mut shuffled = records;
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let test = shuffled.split_off(n_train);
    Ok((shuffled, test))
}
