//! Rule-based risk scoring on fixed clinical thresholds.
//!
//! A non-learned baseline: each feature that crosses (or nearly crosses) its
//! threshold adds risk points, and the clamped 0-100 total maps to a risk
//! level. Only the `High` level counts as a Parkinson's-risk prediction.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data_handling::{FeatureVector, Label};
use crate::error::{Result, Stage};
use crate::models::classifier_trait::ClassifierModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            RiskLevel::High
        } else if score >= 50.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    /// Clamped to `[0, 100]`.
    pub score: f64,
    pub level: RiskLevel,
}

/// Threshold-based screening engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdScreen {
    /// Jitter above this is high risk.
    pub jitter: f64,
    /// Shimmer above this is high risk.
    pub shimmer: f64,
    /// HNR (dB) below this is high risk.
    pub hnr: f64,
}

impl Default for ThresholdScreen {
    fn default() -> Self {
        Self {
            jitter: 0.005,
            shimmer: 0.05,
            hnr: 20.0,
        }
    }
}

impl ThresholdScreen {
    /// Score a feature vector.
    pub fn assess(&self, features: &FeatureVector) -> Result<RiskAssessment> {
        features.ensure_finite(Stage::Prediction)?;

        let mut points = 0u32;

        if features.jitter > self.jitter {
            points += 40;
        } else if features.jitter > self.jitter * 0.75 {
            points += 20;
        }

        if features.shimmer > self.shimmer {
            points += 30;
        } else if features.shimmer > self.shimmer * 0.75 {
            points += 15;
        }

        // lower is worse
        if features.hnr < self.hnr {
            points += 30;
        } else if features.hnr < self.hnr * 1.25 {
            points += 15;
        }

        let score = f64::from(points).min(100.0);
        Ok(RiskAssessment {
            score,
            level: RiskLevel::from_score(score),
        })
    }
}

impl ClassifierModel for ThresholdScreen {
    fn predict_label(&self, features: &FeatureVector) -> Result<Label> {
        let assessment = self.assess(features)?;
        Ok(Label::from(assessment.level == RiskLevel::High))
    }

    fn name(&self) -> &str {
        "threshold-rules"
    }
}
