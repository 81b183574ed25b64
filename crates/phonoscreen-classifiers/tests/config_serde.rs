//! Integration tests for config (de)serialization.

use phonoscreen_classifiers::config::{ModelConfig, PipelineConfig};

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg: PipelineConfig =
        serde_json::from_str(r#"{ "split": { "seed": 7 }, "model": { "c": 10.0 } }"#).unwrap();
    assert_eq!(cfg.split.seed, 7);
    assert_eq!(cfg.split.test_fraction, 0.25);
    assert_eq!(cfg.model.c, 10.0);
    assert_eq!(cfg.model.seed, ModelConfig::default().seed);
    assert_eq!(cfg.generator.n_samples, 200);
}

#[test]
fn pipeline_config_round_trips_through_json() {
    let cfg = PipelineConfig::default();
    let text = serde_json::to_string_pretty(&cfg).unwrap();
    let back: PipelineConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(cfg, back);
}
