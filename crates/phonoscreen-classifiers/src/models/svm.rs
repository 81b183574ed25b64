use std::fmt;

use linfa::traits::{Fit, Predict};
use linfa::Dataset as LinfaDataset;
use linfa_svm::{Svm, SvmError, SvmParams};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::ModelConfig;
use crate::data_handling::{Dataset, FeatureVector, Label, N_FEATURES};
use crate::error::{Result, ScreeningError, Stage};
use crate::models::classifier_trait::ClassifierModel;
use crate::preprocessing::{fit_scaler, Scaler};

/// Fits a soft-margin linear SVM on labeled voice features.
#[derive(Debug, Clone, Default)]
pub struct SvmTrainer {
    config: ModelConfig,
}

impl SvmTrainer {
    pub fn new(config: ModelConfig) -> Self {
        SvmTrainer { config }
    }

    /// Fit the classifier on `train_set`.
    ///
    /// Rows are handed to the SMO solver in an order shuffled by the trainer
    /// seed; features are standardized first when `scale_features` is set.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` - fewer than two samples, or a single label class.
    /// * `NonFiniteFeature` - a training sample holds NaN or infinity.
    /// * `InvalidArgument` - the model configuration is out of range.
    /// * `Solver` - linfa rejected the problem.
    pub fn fit(&self, train_set: &Dataset) -> Result<TrainedClassifier> {
        self.config.validate()?;

        if train_set.len() < 2 {
            return Err(ScreeningError::insufficient(format!(
                "need at least 2 training samples, got {}",
                train_set.len()
            )));
        }
        let labels = train_set.distinct_labels();
        if labels.len() < 2 {
            return Err(ScreeningError::insufficient(format!(
                "training set of {} samples only contains the {:?} label",
                train_set.len(),
                labels[0]
            )));
        }
        for sample in train_set {
            sample.features.ensure_finite(Stage::Training)?;
        }

        let mut order: Vec<usize> = (0..train_set.len()).collect();
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        order.shuffle(&mut rng);
        let ordered = train_set.select(&order);

        let records = ordered.records();
        let targets: Array1<bool> = ordered.targets();

        let scaler = if self.config.scale_features {
            Some(fit_scaler(&records))
        } else {
            None
        };
        let records = match &scaler {
            Some(sc) => sc.transform(&records),
            None => records,
        };

        let dataset = LinfaDataset::new(records, targets);

        let params: SvmParams<f64, bool> = Svm::<f64, bool>::params()
            .eps(self.config.eps)
            .shrinking(self.config.shrinking)
            .pos_neg_weights(self.config.c, self.config.c)
            .linear_kernel();

        let fitted: std::result::Result<Svm<f64, bool>, SvmError> = params.fit(&dataset);
        let svm = fitted.map_err(|e| ScreeningError::Solver(e.to_string()))?;

        log::info!(
            "Trained linear SVM on {} samples ({} support vectors, C = {})",
            train_set.len(),
            svm.nsupport(),
            self.config.c
        );
        log::debug!("{}", svm);

        Ok(TrainedClassifier {
            svm,
            scaler,
            n_train: train_set.len(),
        })
    }
}

/// Fit a linear SVM with the default `ModelConfig`.
pub fn train(train_set: &Dataset) -> Result<TrainedClassifier> {
    SvmTrainer::default().fit(train_set)
}

/// Fitted linear SVM together with the scaler fitted on its training rows.
///
/// Immutable after construction; every prediction goes through `&self`.
pub struct TrainedClassifier {
    svm: Svm<f64, bool>,
    scaler: Option<Scaler>,
    n_train: usize,
}

impl TrainedClassifier {
    pub fn n_support(&self) -> usize {
        self.svm.nsupport()
    }

    pub fn n_train(&self) -> usize {
        self.n_train
    }

    pub fn scaler(&self) -> Option<&Scaler> {
        self.scaler.as_ref()
    }

    fn predict_records(&self, records: Array2<f64>) -> Vec<Label> {
        let records = match &self.scaler {
            Some(sc) => sc.transform(&records),
            None => records,
        };
        let predicted: Array1<bool> = self.svm.predict(&records);
        predicted.iter().map(|&p| Label::from(p)).collect()
    }
}

impl ClassifierModel for TrainedClassifier {
    fn predict_label(&self, features: &FeatureVector) -> Result<Label> {
        features.ensure_finite(Stage::Prediction)?;
        let row = Array2::from_shape_fn((1, N_FEATURES), |(_, c)| features.as_array()[c]);
        single_prediction(self.predict_records(row))
    }

    fn predict_dataset(&self, dataset: &Dataset) -> Result<Vec<Label>> {
        for sample in dataset {
            sample.features.ensure_finite(Stage::Prediction)?;
        }
        if dataset.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.predict_records(dataset.records()))
    }

    fn name(&self) -> &str {
        "linear-svm"
    }
}

fn single_prediction(labels: Vec<Label>) -> Result<Label> {
    labels.into_iter().next().ok_or_else(|| {
        ScreeningError::invalid(Stage::Prediction, "SVM returned no label for a one-row input")
    })
}

impl fmt::Debug for TrainedClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainedClassifier")
            .field("n_train", &self.n_train)
            .field("n_support", &self.svm.nsupport())
            .field("scaled", &self.scaler.is_some())
            .finish()
    }
}
