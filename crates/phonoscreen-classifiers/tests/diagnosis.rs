//! Integration tests for single-sample diagnosis against a trained SVM.

use std::sync::Arc;
use std::thread;

use phonoscreen_classifiers::diagnosis::{HIGH_RISK_MESSAGE, LOW_RISK_MESSAGE};
use phonoscreen_classifiers::{
    diagnose, generate, split, train, FeatureVector, Label, ScreeningError, Stage,
    TrainedClassifier,
};

fn trained() -> TrainedClassifier {
    let ds = generate(200, 42).unwrap();
    let parts = split(&ds, 0.25, 42).unwrap();
    train(&parts.train).unwrap()
}

#[test]
fn parkinsonian_profile_is_high_risk() {
    let clf = trained();
    let d = diagnose(&FeatureVector::new(0.009, 0.08, 12.5), &clf).unwrap();
    assert_eq!(d.label, Label::ParkinsonsRisk);
    assert_eq!(d.message, HIGH_RISK_MESSAGE);
}

#[test]
fn healthy_profile_is_low_risk() {
    let clf = trained();
    let d = diagnose(&FeatureVector::new(0.002, 0.03, 25.0), &clf).unwrap();
    assert_eq!(d.label, Label::Healthy);
    assert_eq!(d.message, LOW_RISK_MESSAGE);
}

#[test]
fn borderline_profile_yields_a_valid_label() {
    let clf = trained();
    let d = diagnose(&FeatureVector::new(0.0055, 0.055, 18.0), &clf).unwrap();
    assert!(d.message == HIGH_RISK_MESSAGE || d.message == LOW_RISK_MESSAGE);
}

#[test]
fn repeated_calls_agree() {
    let clf = trained();
    let fv = FeatureVector::new(0.0055, 0.055, 18.0);
    let first = diagnose(&fv, &clf).unwrap();
    for _ in 0..5 {
        assert_eq!(diagnose(&fv, &clf).unwrap(), first);
    }
}

#[test]
fn non_finite_input_is_rejected() {
    let clf = trained();
    for fv in [
        FeatureVector::new(f64::NAN, 0.03, 25.0),
        FeatureVector::new(0.002, f64::INFINITY, 25.0),
        FeatureVector::new(0.002, 0.03, f64::NEG_INFINITY),
    ] {
        assert!(matches!(
            diagnose(&fv, &clf),
            Err(ScreeningError::NonFiniteFeature { stage: Stage::Prediction, .. })
        ));
    }
}

#[test]
fn negative_features_pass_through() {
    let clf = trained();
    assert!(diagnose(&FeatureVector::new(-0.001, -0.02, 25.0), &clf).is_ok());
}

#[test]
fn concurrent_readers_share_one_classifier() {
    let clf = Arc::new(trained());
    let expected = diagnose(&FeatureVector::new(0.009, 0.08, 12.5), clf.as_ref()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let clf = Arc::clone(&clf);
            thread::spawn(move || diagnose(&FeatureVector::new(0.009, 0.08, 12.5), clf.as_ref()).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
