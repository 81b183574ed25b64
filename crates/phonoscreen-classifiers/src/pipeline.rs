//! generate -> split -> train -> evaluate, driven by one `PipelineConfig`.
use crate::config::PipelineConfig;
use crate::data_handling::{Dataset, TrainTestSplit};
use crate::error::Result;
use crate::evaluation::{evaluate, EvaluationResult};
use crate::models::svm::{SvmTrainer, TrainedClassifier};
use crate::split::split_from_config;
use crate::synthetic::generate_from_config;

/// Everything produced by one pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub dataset: Dataset,
    pub split: TrainTestSplit,
    pub classifier: TrainedClassifier,
    pub evaluation: EvaluationResult,
}

/// Run the full training pipeline. Each stage either succeeds or the error
/// is returned as-is; nothing partially built is handed back.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutcome> {
    let dataset = generate_from_config(&config.generator)?;
    let split = split_from_config(&dataset, &config.split)?;
    let classifier = SvmTrainer::new(config.model.clone()).fit(&split.train)?;
    let evaluation = evaluate(&classifier, &split.test)?;

    log::info!(
        "Pipeline finished: {} train / {} test samples, holdout accuracy {:.4}",
        split.train.len(),
        split.test.len(),
        evaluation.accuracy
    );

    Ok(PipelineOutcome {
        dataset,
        split,
        classifier,
        evaluation,
    })
}
