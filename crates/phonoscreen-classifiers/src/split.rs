//! Seeded train/holdout partitioning.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::SplitConfig;
use crate::data_handling::{Dataset, TrainTestSplit};
use crate::error::{Result, ScreeningError, Stage};

/// Partition `dataset` into training and holdout subsets.
///
/// Sample indices are shuffled with a generator seeded by `seed`; the last
/// `round(n * test_fraction)` shuffled indices form the holdout, the rest form
/// the training set. Both subsets keep the shuffle order.
///
/// # Errors
///
/// `InvalidArgument` if `test_fraction` is not strictly inside `(0, 1)` or the
/// dataset is empty.
pub fn split(dataset: &Dataset, test_fraction: f64, seed: u64) -> Result<TrainTestSplit> {
    if !(test_fraction.is_finite() && test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(ScreeningError::invalid(
            Stage::Splitting,
            format!("test_fraction must be in (0, 1), got {}", test_fraction),
        ));
    }
    if dataset.is_empty() {
        return Err(ScreeningError::invalid(Stage::Splitting, "cannot split an empty dataset"));
    }

    let n = dataset.len();
    let n_test = (n as f64 * test_fraction).round() as usize;

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_indices = indices.split_off(n - n_test);
    let train_indices = indices;

    if train_indices.is_empty() || test_indices.is_empty() {
        log::warn!(
            "Split of {} samples at test_fraction {} leaves an empty subset (train {}, test {})",
            n,
            test_fraction,
            train_indices.len(),
            test_indices.len()
        );
    }
    log::debug!(
        "Split {} samples into {} train / {} test (seed {})",
        n,
        train_indices.len(),
        test_indices.len(),
        seed
    );

    Ok(TrainTestSplit {
        train: dataset.select(&train_indices),
        test: dataset.select(&test_indices),
        train_indices,
        test_indices,
    })
}

pub fn split_from_config(dataset: &Dataset, config: &SplitConfig) -> Result<TrainTestSplit> {
    split(dataset, config.test_fraction, config.seed)
}
