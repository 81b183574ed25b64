use std::fmt;

use thiserror::Error;

/// Pipeline stage an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Generation,
    Splitting,
    Training,
    Evaluation,
    Prediction,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Stage::Generation => "dataset generation",
            Stage::Splitting => "train/test split",
            Stage::Training => "classifier training",
            Stage::Evaluation => "evaluation",
            Stage::Prediction => "prediction",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by every stage of the screening pipeline.
#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("{stage}: invalid argument: {reason}")]
    InvalidArgument { stage: Stage, reason: String },

    #[error("classifier training: insufficient data: {reason}")]
    InsufficientData { reason: String },

    #[error("{stage}: feature vector has non-finite {feature} value ({value})")]
    NonFiniteFeature {
        stage: Stage,
        feature: &'static str,
        value: f64,
    },

    #[error("classifier training: SVM solver failed: {0}")]
    Solver(String),
}

impl ScreeningError {
    pub(crate) fn invalid(stage: Stage, reason: impl Into<String>) -> Self {
        ScreeningError::InvalidArgument {
            stage,
            reason: reason.into(),
        }
    }

    pub(crate) fn insufficient(reason: impl Into<String>) -> Self {
        ScreeningError::InsufficientData {
            reason: reason.into(),
        }
    }

    /// Stage the error originated from.
    pub fn stage(&self) -> Stage {
        match self {
            ScreeningError::InvalidArgument { stage, .. }
            | ScreeningError::NonFiniteFeature { stage, .. } => *stage,
            ScreeningError::InsufficientData { .. } | ScreeningError::Solver(_) => Stage::Training,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScreeningError>;
