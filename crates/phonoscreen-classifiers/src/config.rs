//! Central configuration for the screening pipeline.
//!
//! Every stage gets its own seed so that generation, splitting and training
//! can be reproduced independently of each other.
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreeningError, Stage};

/// Closed interval `[min, max]` a synthetic feature is drawn from.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ScreeningError::invalid(
                Stage::Generation,
                format!("{} range bounds must be finite, got [{}, {}]", name, self.min, self.max),
            ));
        }
        if self.min > self.max {
            return Err(ScreeningError::invalid(
                Stage::Generation,
                format!("{} range is misconfigured: min {} > max {}", name, self.min, self.max),
            ));
        }
        Ok(())
    }
}

/// Per-feature generation ranges for one population cluster.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ClassRanges {
    pub jitter: FeatureRange,
    pub shimmer: FeatureRange,
    pub hnr: FeatureRange,
}

impl ClassRanges {
    /// Healthy controls: low jitter/shimmer, high HNR.
    pub const fn healthy() -> Self {
        Self {
            jitter: FeatureRange::new(0.001, 0.005),
            shimmer: FeatureRange::new(0.01, 0.05),
            hnr: FeatureRange::new(20.0, 30.0),
        }
    }

    /// Parkinsonian voice: elevated jitter/shimmer, reduced HNR.
    pub const fn parkinsons_risk() -> Self {
        Self {
            jitter: FeatureRange::new(0.005, 0.012),
            shimmer: FeatureRange::new(0.05, 0.10),
            hnr: FeatureRange::new(10.0, 20.0),
        }
    }

    pub(crate) fn validate(&self, class: &str) -> Result<()> {
        self.jitter.validate(&format!("{} jitter", class))?;
        self.shimmer.validate(&format!("{} shimmer", class))?;
        self.hnr.validate(&format!("{} hnr", class))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub n_samples: usize,
    pub seed: u64,
    pub healthy: ClassRanges,
    pub parkinsons: ClassRanges,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n_samples: 200,
            seed: 42,
            healthy: ClassRanges::healthy(),
            parkinsons: ClassRanges::parkinsons_risk(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SplitConfig {
    pub test_fraction: f64,
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.25,
            seed: 42,
        }
    }
}

/// Hyper-parameters of the linear soft-margin SVM.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Misclassification penalty, applied to both classes.
    pub c: f64,
    /// Stopping tolerance of the SMO solver.
    pub eps: f64,
    pub shrinking: bool,
    /// Standardize features before fitting.
    pub scale_features: bool,
    /// Seeds the order in which training rows are handed to the solver.
    pub seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            eps: 1e-3,
            shrinking: true,
            scale_features: true,
            seed: 42,
        }
    }
}

impl ModelConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.c.is_finite() && self.c > 0.0) {
            return Err(ScreeningError::invalid(
                Stage::Training,
                format!("penalty c must be a positive finite number, got {}", self.c),
            ));
        }
        if !(self.eps.is_finite() && self.eps > 0.0) {
            return Err(ScreeningError::invalid(
                Stage::Training,
                format!("solver tolerance eps must be a positive finite number, got {}", self.eps),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub generator: GeneratorConfig,
    pub split: SplitConfig,
    pub model: ModelConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ranges_do_not_overlap_in_hnr() {
        let healthy = ClassRanges::healthy();
        let pd = ClassRanges::parkinsons_risk();
        assert!(healthy.hnr.min >= pd.hnr.max);
        assert!(healthy.jitter.max <= pd.jitter.min);
        assert!(healthy.shimmer.max <= pd.shimmer.min);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let range = FeatureRange::new(0.5, 0.1);
        let err = range.validate("healthy jitter").unwrap_err();
        assert!(matches!(
            err,
            ScreeningError::InvalidArgument { stage: Stage::Generation, .. }
        ));
        assert!(err.to_string().contains("min 0.5 > max 0.1"));
    }

    #[test]
    fn model_config_rejects_non_positive_penalty() {
        let cfg = ModelConfig {
            c: 0.0,
            ..ModelConfig::default()
        };
        assert!(cfg.validate().is_err());
        assert!(ModelConfig::default().validate().is_ok());
    }
}
