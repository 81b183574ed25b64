//! Data structures for labeled voice-feature tables.
//!
//! This module defines `FeatureVector`, `Label`, `LabeledSample` and
//! `Dataset`, plus the conversions into the ndarray records/targets layout
//! consumed by the SVM.
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreeningError, Stage};

/// Number of acoustic features per sample.
pub const N_FEATURES: usize = 3;

/// Column names in canonical order, used for previews and logging.
pub const FEATURE_NAMES: [&str; N_FEATURES] = ["jitter", "shimmer", "hnr"];

/// Acoustic biomarkers of a single sustained-vowel recording.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Cycle-to-cycle pitch period variation.
    pub jitter: f64,
    /// Cycle-to-cycle amplitude variation.
    pub shimmer: f64,
    /// Harmonics-to-noise ratio in dB.
    pub hnr: f64,
}

impl FeatureVector {
    pub const fn new(jitter: f64, shimmer: f64, hnr: f64) -> Self {
        Self {
            jitter,
            shimmer,
            hnr,
        }
    }

    pub fn as_array(&self) -> [f64; N_FEATURES] {
        [self.jitter, self.shimmer, self.hnr]
    }

    /// Fails with `NonFiniteFeature` naming the first NaN/infinite field.
    pub fn ensure_finite(&self, stage: Stage) -> Result<()> {
        for (name, value) in FEATURE_NAMES.into_iter().zip(self.as_array()) {
            if !value.is_finite() {
                return Err(ScreeningError::NonFiniteFeature {
                    stage,
                    feature: name,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl From<[f64; N_FEATURES]> for FeatureVector {
    fn from(v: [f64; N_FEATURES]) -> Self {
        FeatureVector::new(v[0], v[1], v[2])
    }
}

/// Screening status. Encoded as 0 (healthy) / 1 (Parkinson's risk).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Label {
    Healthy = 0,
    ParkinsonsRisk = 1,
}

impl Label {
    pub fn as_int(self) -> u8 {
        self as u8
    }

    pub fn from_int(value: u8) -> Option<Label> {
        match value {
            0 => Some(Label::Healthy),
            1 => Some(Label::ParkinsonsRisk),
            _ => None,
        }
    }

    /// Binary target used by the SVM; `true` marks the positive (risk) class.
    pub fn is_positive(self) -> bool {
        self == Label::ParkinsonsRisk
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Label::ParkinsonsRisk
        } else {
            Label::Healthy
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub features: FeatureVector,
    pub label: Label,
}

impl LabeledSample {
    pub const fn new(features: FeatureVector, label: Label) -> Self {
        Self { features, label }
    }
}

/// Ordered table of labeled samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<LabeledSample>,
}

impl Dataset {
    pub fn new(samples: Vec<LabeledSample>) -> Self {
        Dataset { samples }
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<LabeledSample> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledSample> {
        self.samples.iter()
    }

    /// Number of samples carrying `label`.
    pub fn count(&self, label: Label) -> usize {
        self.samples.iter().filter(|s| s.label == label).count()
    }

    /// Distinct labels present, in ascending order.
    pub fn distinct_labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self.samples.iter().map(|s| s.label).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// First `n` samples (or all of them when fewer).
    pub fn head(&self, n: usize) -> &[LabeledSample] {
        &self.samples[..n.min(self.samples.len())]
    }

    /// New dataset holding the samples at `indices`, in that order.
    ///
    /// Panics if an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset::new(indices.iter().map(|&i| self.samples[i]).collect())
    }

    /// Feature matrix with one row per sample and columns `(jitter, shimmer, hnr)`.
    pub fn records(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.samples.len(), N_FEATURES), |(r, c)| {
            self.samples[r].features.as_array()[c]
        })
    }

    /// Binary targets, `true` for `ParkinsonsRisk`.
    pub fn targets(&self) -> Array1<bool> {
        self.samples.iter().map(|s| s.label.is_positive()).collect()
    }

    pub fn log_summary(&self) {
        log::debug!(
            "Dataset: {} samples ({} healthy, {} Parkinson's risk), {} features",
            self.len(),
            self.count(Label::Healthy),
            self.count(Label::ParkinsonsRisk),
            N_FEATURES
        );
    }
}

impl FromIterator<LabeledSample> for Dataset {
    fn from_iter<I: IntoIterator<Item = LabeledSample>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LabeledSample;
    type IntoIter = std::slice::Iter<'a, LabeledSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Disjoint training and holdout partitions of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub train: Dataset,
    pub test: Dataset,
    /// Positions in the source dataset, in shuffle order.
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}
