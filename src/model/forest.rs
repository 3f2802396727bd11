use rayon::prelude::*;

use crate::error::ScoringError;
use crate::model::dataset::{Sample, FEATURE_COUNT, FEATURE_NAMES, SYNTHETIC_APPOINTMENTS};
use crate::model::rng::SplitMix64;
use crate::model::tree::DecisionTree;
use crate::model::{ModelDescriptor, Scorer};

pub const DEFAULT_ESTIMATORS: usize = 10;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestConfig {
    pub n_estimators: usize,
    pub seed: u64,
    /// Features searched per split. `None` means `sqrt(feature count)`.
    pub max_features: Option<usize>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: DEFAULT_ESTIMATORS,
            seed: DEFAULT_SEED,
            max_features: None,
        }
    }
}

impl ForestConfig {
    fn resolved_max_features(&self) -> usize {
        self.max_features
            .unwrap_or_else(|| (FEATURE_COUNT as f64).sqrt() as usize)
            .clamp(1, FEATURE_COUNT)
    }
}

/// Bagged ensemble of [DecisionTree]s. The no-show probability is the mean leaf
/// probability across trees.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    config: ForestConfig,
}

impl RandomForest {
    /// Fits on the built-in synthetic appointments with the default configuration.
    pub fn fit_default() -> Self {
        Self::fit(&SYNTHETIC_APPOINTMENTS, ForestConfig::default())
    }

    /// Tree seeds are drawn up front from one SplitMix64 stream, so fitting the trees in
    /// parallel yields the same forest as fitting them in order.
    pub fn fit(samples: &[Sample], config: ForestConfig) -> Self {
        let max_features = config.resolved_max_features();
        let mut master = SplitMix64::new(config.seed);
        let seeds: Vec<u64> = (0..config.n_estimators).map(|_| master.next_u64()).collect();

        let trees: Vec<DecisionTree> = if samples.is_empty() {
            Vec::new()
        } else {
            seeds
                .par_iter()
                .map(|&seed| {
                    let mut rng = SplitMix64::new(seed);
                    let rows: Vec<usize> = (0..samples.len())
                        .map(|_| rng.next_index(samples.len()))
                        .collect();
                    DecisionTree::fit(samples, &rows, max_features, &mut rng)
                })
                .collect()
        };

        Self { trees, config }
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    pub fn config(&self) -> ForestConfig {
        self.config
    }

    pub fn is_trained(&self) -> bool {
        !self.trees.is_empty()
    }
}

impl Scorer for RandomForest {
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ScoringError> {
        if !self.is_trained() {
            return Err(ScoringError::NotTrained);
        }
        if features.len() != FEATURE_COUNT {
            return Err(ScoringError::FeatureCount {
                expected: FEATURE_COUNT,
                actual: features.len(),
            });
        }
        if let Some(index) = features.iter().position(|value| !value.is_finite()) {
            return Err(ScoringError::NonFinite {
                feature: FEATURE_NAMES[index],
            });
        }

        let total: f64 = self.trees.iter().map(|tree| tree.predict(features)).sum();
        Ok((total / self.trees.len() as f64).clamp(0.0, 1.0))
    }

    fn describe(&self) -> ModelDescriptor {
        ModelDescriptor {
            model_type: "RandomForestClassifier",
            n_estimators: self.config.n_estimators,
            features: FEATURE_NAMES.to_vec(),
            trained: self.is_trained(),
        }
    }
}
