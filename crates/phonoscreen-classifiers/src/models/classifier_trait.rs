use crate::data_handling::{Dataset, FeatureVector, Label};
use crate::error::Result;

/// Decision function shared by the fitted SVM and the rule-based baseline.
///
/// Implementations are immutable once built, so `&self` predictions can be
/// issued from any number of threads.
pub trait ClassifierModel {
    /// Predict the label of one sample. Fails on non-finite features.
    fn predict_label(&self, features: &FeatureVector) -> Result<Label>;

    /// Predict a label for every sample in `dataset`, in order.
    fn predict_dataset(&self, dataset: &Dataset) -> Result<Vec<Label>> {
        dataset
            .iter()
            .map(|sample| self.predict_label(&sample.features))
            .collect()
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
