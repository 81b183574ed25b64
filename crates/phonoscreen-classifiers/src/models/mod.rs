pub mod classifier_trait;
pub mod svm;
pub mod threshold;
