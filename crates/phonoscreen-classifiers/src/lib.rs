//! phonoscreen-classifiers: screening of acoustic voice biomarkers for
//! Parkinson's disease risk.
//!
//! The crate covers the whole classification pipeline: a seeded synthetic
//! feature generator, a reproducible train/holdout splitter, a linear SVM
//! trainer (linfa's SMO solver on standardized features), an evaluator and a
//! single-sample `diagnose` call. A rule-based threshold screen is provided
//! as a non-learned baseline behind the same `ClassifierModel` trait.
//!
//! Feature extraction from raw audio is not part of this crate; callers supply
//! `(jitter, shimmer, hnr)` triples directly.
pub mod config;
pub mod data_handling;
pub mod diagnosis;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod split;
pub mod synthetic;

pub use data_handling::{Dataset, FeatureVector, Label, LabeledSample, TrainTestSplit};
pub use diagnosis::{diagnose, Diagnosis};
pub use error::{Result, ScreeningError, Stage};
pub use evaluation::{evaluate, EvaluationResult};
pub use models::classifier_trait::ClassifierModel;
pub use models::svm::{train, SvmTrainer, TrainedClassifier};
pub use models::threshold::ThresholdScreen;
pub use split::split;
pub use synthetic::generate;
