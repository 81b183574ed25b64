//! CLI screening helpers: config loading, pipeline run and report printing.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use phonoscreen_classifiers::config::PipelineConfig;
use phonoscreen_classifiers::evaluation::EvaluationResult;
use phonoscreen_classifiers::models::threshold::{RiskAssessment, ThresholdScreen};
use phonoscreen_classifiers::pipeline::{run_pipeline, PipelineOutcome};
use phonoscreen_classifiers::{diagnose, evaluate, Diagnosis, FeatureVector};

/// Rows of the generated table shown in the report.
const PREVIEW_ROWS: usize = 5;

/// A named feature vector screened after training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticSample {
    pub name: String,
    pub features: FeatureVector,
}

impl DiagnosticSample {
    fn new(name: &str, jitter: f64, shimmer: f64, hnr: f64) -> Self {
        Self {
            name: name.to_string(),
            features: FeatureVector::new(jitter, shimmer, hnr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub pipeline: PipelineConfig,
    pub baseline: ThresholdScreen,
    pub samples: Vec<DiagnosticSample>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            baseline: ThresholdScreen::default(),
            samples: vec![
                DiagnosticSample::new("Sample 1", 0.009, 0.08, 12.5),
                DiagnosticSample::new("Sample 2", 0.002, 0.03, 25.0),
                DiagnosticSample::new("Sample 3", 0.0055, 0.055, 18.0),
            ],
        }
    }
}

/// Load a screening configuration from a JSON file.
pub fn load_screen_config<P: AsRef<Path>>(path: P) -> Result<ScreenConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ScreenConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

#[derive(Debug)]
pub struct SampleResult {
    pub sample: DiagnosticSample,
    pub diagnosis: Diagnosis,
    pub risk: RiskAssessment,
}

#[derive(Debug)]
pub struct ScreenReport {
    pub outcome: PipelineOutcome,
    pub baseline: EvaluationResult,
    pub samples: Vec<SampleResult>,
}

/// Train on the synthetic table and screen the configured samples.
pub fn run_screen(config: &ScreenConfig) -> Result<ScreenReport> {
    let outcome = run_pipeline(&config.pipeline).context("Screening pipeline failed")?;
    let baseline = evaluate(&config.baseline, &outcome.split.test)
        .context("Threshold baseline evaluation failed")?;

    let mut samples = Vec::with_capacity(config.samples.len());
    for sample in &config.samples {
        let diagnosis = diagnose(&sample.features, &outcome.classifier)
            .with_context(|| format!("Diagnosis of {} failed", sample.name))?;
        let risk = config
            .baseline
            .assess(&sample.features)
            .with_context(|| format!("Risk scoring of {} failed", sample.name))?;
        samples.push(SampleResult {
            sample: sample.clone(),
            diagnosis,
            risk,
        });
    }

    Ok(ScreenReport {
        outcome,
        baseline,
        samples,
    })
}

/// Print the human-readable report.
pub fn write_report<W: Write>(report: &ScreenReport, out: &mut W) -> Result<()> {
    writeln!(out, "--- Simulated Parkinson's Voice Feature Data Sample ---")?;
    writeln!(
        out,
        "{:>3}  {:>10}  {:>12}  {:>8}  {:>6}",
        "", "Jitter (%)", "Shimmer (dB)", "HNR (dB)", "Status"
    )?;
    for (i, s) in report.outcome.dataset.head(PREVIEW_ROWS).iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:>10.6}  {:>12.6}  {:>8.4}  {:>6}",
            i,
            s.features.jitter,
            s.features.shimmer,
            s.features.hnr,
            s.label.as_int()
        )?;
    }
    writeln!(out)?;

    let eval = &report.outcome.evaluation;
    writeln!(out, "Model Training Complete. Test Accuracy: {:.2}", eval.accuracy)?;
    writeln!(
        out,
        "Holdout: {} samples (TP {}, TN {}, FP {}, FN {}); {} support vectors",
        eval.confusion.total(),
        eval.confusion.true_positive,
        eval.confusion.true_negative,
        eval.confusion.false_positive,
        eval.confusion.false_negative,
        report.outcome.classifier.n_support()
    )?;
    writeln!(out, "Threshold Baseline Accuracy: {:.2}", report.baseline.accuracy)?;
    writeln!(out, "----------------------------------------------------------")?;

    for result in &report.samples {
        let f = &result.sample.features;
        writeln!(out)?;
        writeln!(
            out,
            "{} Features: Jitter={:.4}, Shimmer={:.2}, HNR={:.1}",
            result.sample.name, f.jitter, f.shimmer, f.hnr
        )?;
        writeln!(out, "-> Diagnosis: {}", result.diagnosis)?;
        writeln!(
            out,
            "   Threshold score: {:.0}% ({})",
            result.risk.score, result.risk.level
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "NOTE: This model is trained on simulated data. Real clinical results require a \
         production-grade model trained on extensive patient datasets."
    )?;
    Ok(())
}
