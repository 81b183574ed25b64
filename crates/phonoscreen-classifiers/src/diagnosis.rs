//! Single-sample screening call.
//!
//! `diagnose` only computes a label and picks the matching fixed message;
//! printing is left to the caller.
use std::fmt;

use serde::Serialize;

use crate::data_handling::{FeatureVector, Label};
use crate::error::Result;
use crate::models::classifier_trait::ClassifierModel;

pub const HIGH_RISK_MESSAGE: &str = "High risk for Parkinson's disease based on vocal features.";
pub const LOW_RISK_MESSAGE: &str = "Low risk for Parkinson's disease; vocal features appear typical.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub label: Label,
    pub message: &'static str,
}

impl Diagnosis {
    pub fn from_label(label: Label) -> Self {
        let message = match label {
            Label::ParkinsonsRisk => HIGH_RISK_MESSAGE,
            Label::Healthy => LOW_RISK_MESSAGE,
        };
        Diagnosis { label, message }
    }

    pub fn is_high_risk(&self) -> bool {
        self.label == Label::ParkinsonsRisk
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Screen one feature vector with `classifier`.
///
/// Negative jitter/shimmer values are passed to the classifier as-is; only
/// NaN or infinite values are rejected (`NonFiniteFeature`).
pub fn diagnose<C: ClassifierModel + ?Sized>(
    features: &FeatureVector,
    classifier: &C,
) -> Result<Diagnosis> {
    let label = classifier.predict_label(features)?;
    log::debug!(
        "{} predicted {:?} for jitter={} shimmer={} hnr={}",
        classifier.name(),
        label,
        features.jitter,
        features.shimmer,
        features.hnr
    );
    Ok(Diagnosis::from_label(label))
}
