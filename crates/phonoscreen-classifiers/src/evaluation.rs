//! Holdout evaluation of a fitted classifier.
use serde::{Deserialize, Serialize};

use crate::data_handling::{Dataset, Label};
use crate::error::{Result, ScreeningError, Stage};
use crate::models::classifier_trait::ClassifierModel;

/// Binary confusion counts, `ParkinsonsRisk` being the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positive: usize,
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
}

impl ConfusionMatrix {
    fn record(&mut self, predicted: Label, actual: Label) {
        match (predicted, actual) {
            (Label::ParkinsonsRisk, Label::ParkinsonsRisk) => self.true_positive += 1,
            (Label::Healthy, Label::Healthy) => self.true_negative += 1,
            (Label::ParkinsonsRisk, Label::Healthy) => self.false_positive += 1,
            (Label::Healthy, Label::ParkinsonsRisk) => self.false_negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    /// Recall on the risk class; `None` when the holdout has no risk samples.
    pub fn sensitivity(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// Recall on the healthy class; `None` when the holdout has no healthy samples.
    pub fn specificity(&self) -> Option<f64> {
        ratio(self.true_negative, self.true_negative + self.false_positive)
    }
}

fn ratio(num: usize, den: usize) -> Option<f64> {
    if den == 0 {
        None
    } else {
        Some(num as f64 / den as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Fraction of holdout samples predicted correctly, in `[0, 1]`.
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
}

/// Accuracy of `classifier` on `test_set`.
///
/// # Errors
///
/// `InvalidArgument` if `test_set` is empty; prediction errors are passed
/// through unchanged.
pub fn evaluate<C: ClassifierModel + ?Sized>(
    classifier: &C,
    test_set: &Dataset,
) -> Result<EvaluationResult> {
    if test_set.is_empty() {
        return Err(ScreeningError::invalid(Stage::Evaluation, "test set is empty"));
    }

    let predictions = classifier.predict_dataset(test_set)?;

    let mut confusion = ConfusionMatrix::default();
    for (predicted, sample) in predictions.iter().zip(test_set) {
        confusion.record(*predicted, sample.label);
    }

    let correct = confusion.true_positive + confusion.true_negative;
    let accuracy = correct as f64 / test_set.len() as f64;

    log::debug!(
        "Evaluated {} on {} holdout samples: accuracy {:.4} ({:?})",
        classifier.name(),
        test_set.len(),
        accuracy,
        confusion
    );

    Ok(EvaluationResult { accuracy, confusion })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::{FeatureVector, LabeledSample};

    /// Calls everything with HNR below 20 dB a risk sample.
    struct HnrCutoff;

    impl ClassifierModel for HnrCutoff {
        fn predict_label(&self, features: &FeatureVector) -> Result<Label> {
            Ok(Label::from(features.hnr < 20.0))
        }
    }

    fn holdout() -> Dataset {
        Dataset::new(vec![
            LabeledSample::new(FeatureVector::new(0.002, 0.02, 25.0), Label::Healthy),
            LabeledSample::new(FeatureVector::new(0.003, 0.03, 19.0), Label::Healthy),
            LabeledSample::new(FeatureVector::new(0.009, 0.08, 12.0), Label::ParkinsonsRisk),
            LabeledSample::new(FeatureVector::new(0.008, 0.07, 15.0), Label::ParkinsonsRisk),
        ])
    }

    #[test]
    fn accuracy_and_confusion_counts() {
        let result = evaluate(&HnrCutoff, &holdout()).unwrap();
        assert_eq!(result.accuracy, 0.75);
        assert_eq!(result.confusion.true_positive, 2);
        assert_eq!(result.confusion.true_negative, 1);
        assert_eq!(result.confusion.false_positive, 1);
        assert_eq!(result.confusion.false_negative, 0);
        assert_eq!(result.confusion.total(), 4);
        assert_eq!(result.confusion.sensitivity(), Some(1.0));
        assert_eq!(result.confusion.specificity(), Some(0.5));
    }

    #[test]
    fn empty_holdout_is_rejected() {
        let err = evaluate(&HnrCutoff, &Dataset::default()).unwrap_err();
        assert!(matches!(
            err,
            ScreeningError::InvalidArgument { stage: Stage::Evaluation, .. }
        ));
    }

    #[test]
    fn single_class_holdout_has_no_sensitivity() {
        let healthy_only = holdout().select(&[0, 1]);
        let result = evaluate(&HnrCutoff, &healthy_only).unwrap();
        assert_eq!(result.confusion.sensitivity(), None);
    }
}
