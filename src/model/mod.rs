pub mod dataset;
pub mod forest;
pub mod rng;
pub mod tree;

use std::sync::OnceLock;

use serde::Serialize;

use crate::error::ScoringError;

pub use dataset::{Sample, FEATURE_COUNT, FEATURE_NAMES, SYNTHETIC_APPOINTMENTS};
pub use forest::{ForestConfig, RandomForest, DEFAULT_ESTIMATORS, DEFAULT_SEED};
pub use rng::SplitMix64;
pub use tree::{DecisionTree, Node};

/// Maps a feature vector to the probability of the "no-show" class.
pub trait Scorer: Send + Sync {
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ScoringError>;

    fn describe(&self) -> ModelDescriptor;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub model_type: &'static str,
    pub n_estimators: usize,
    pub features: Vec<&'static str>,
    pub trained: bool,
}

static SHARED_FOREST: OnceLock<RandomForest> = OnceLock::new();

/// Process-wide forest, fit on first access and read-only afterwards.
/// `serve` touches this before binding so no request pays for training.
pub fn shared_forest() -> &'static RandomForest {
    SHARED_FOREST.get_or_init(|| {
        let forest = RandomForest::fit_default();
        tracing::info!(
            n_estimators = forest.trees().len(),
            seed = forest.config().seed,
            "no-show model trained"
        );
        forest
    })
}
