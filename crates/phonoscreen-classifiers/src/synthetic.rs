//! Seeded generator for the two-cluster synthetic voice-feature table.
//!
//! Healthy controls are drawn first, then the Parkinson's-risk cluster. Within
//! each class the columns are drawn one after another (all jitter values, then
//! all shimmer values, then all HNR values), so a given `(n, seed)` always
//! yields the same table.
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ClassRanges, FeatureRange, GeneratorConfig};
use crate::data_handling::{Dataset, FeatureVector, Label, LabeledSample};
use crate::error::{Result, ScreeningError, Stage};

/// Generate `n` samples with the default healthy / Parkinson's-risk ranges.
pub fn generate(n: usize, seed: u64) -> Result<Dataset> {
    generate_with_ranges(n, seed, &ClassRanges::healthy(), &ClassRanges::parkinsons_risk())
}

/// Generate a dataset from a `GeneratorConfig`.
pub fn generate_from_config(config: &GeneratorConfig) -> Result<Dataset> {
    generate_with_ranges(config.n_samples, config.seed, &config.healthy, &config.parkinsons)
}

/// Generate `n / 2` healthy samples followed by `n / 2` Parkinson's-risk samples.
///
/// # Errors
///
/// `InvalidArgument` when `n` is zero or odd, or when a range has `min > max`
/// or non-finite bounds.
pub fn generate_with_ranges(
    n: usize,
    seed: u64,
    healthy: &ClassRanges,
    parkinsons: &ClassRanges,
) -> Result<Dataset> {
    if n == 0 || n % 2 != 0 {
        return Err(ScreeningError::invalid(
            Stage::Generation,
            format!("sample count must be an even positive integer, got {}", n),
        ));
    }
    healthy.validate("healthy")?;
    parkinsons.validate("parkinsons")?;

    let half = n / 2;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut samples = Vec::with_capacity(n);
    samples.extend(draw_class(&mut rng, healthy, half, Label::Healthy));
    samples.extend(draw_class(&mut rng, parkinsons, half, Label::ParkinsonsRisk));

    let dataset = Dataset::new(samples);
    log::debug!("Generated synthetic dataset with seed {}", seed);
    dataset.log_summary();
    Ok(dataset)
}

fn draw_class(
    rng: &mut StdRng,
    ranges: &ClassRanges,
    count: usize,
    label: Label,
) -> Vec<LabeledSample> {
    let jitter = draw_column(rng, &ranges.jitter, count);
    let shimmer = draw_column(rng, &ranges.shimmer, count);
    let hnr = draw_column(rng, &ranges.hnr, count);

    jitter
        .into_iter()
        .zip(shimmer)
        .zip(hnr)
        .map(|((j, s), h)| LabeledSample::new(FeatureVector::new(j, s, h), label))
        .collect()
}

fn draw_column(rng: &mut StdRng, range: &FeatureRange, count: usize) -> Vec<f64> {
    // Bounds were validated by the caller.
    let dist = Uniform::new_inclusive(range.min, range.max);
    dist.sample_iter(rng).take(count).collect()
}
