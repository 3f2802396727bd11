//! CART classification tree: Gini impurity, grown until leaves are pure.

use crate::model::dataset::{Sample, FEATURE_COUNT};
use crate::model::rng::SplitMix64;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf {
        /// Fraction of no-show samples that reached this leaf.
        probability: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: Node,
}

struct BestSplit {
    impurity: f64,
    feature: usize,
    threshold: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

impl DecisionTree {
    /// Fits a tree on `samples[rows]`. Rows may repeat (bootstrap draws count once per draw).
    /// At each node the feature order is shuffled and at most `max_features` non-constant
    /// features are searched for the split.
    pub fn fit(samples: &[Sample], rows: &[usize], max_features: usize, rng: &mut SplitMix64) -> Self {
        Self {
            root: grow(samples, rows, max_features, rng),
        }
    }

    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { probability } => return *probability,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn depth(&self) -> usize {
        fn depth_of(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + depth_of(left).max(depth_of(right)),
            }
        }
        depth_of(&self.root)
    }
}

fn grow(samples: &[Sample], rows: &[usize], max_features: usize, rng: &mut SplitMix64) -> Node {
    let positives = count_positive(samples, rows);
    if positives == 0 || positives == rows.len() || rows.len() < 2 {
        return leaf(positives, rows.len());
    }

    let mut features: [usize; FEATURE_COUNT] = std::array::from_fn(|index| index);
    rng.shuffle(&mut features);

    let mut best: Option<BestSplit> = None;
    let mut visited = 0;
    for &feature in &features {
        if visited >= max_features {
            break;
        }
        let mut values: Vec<f64> = rows.iter().map(|&row| samples[row].features[feature]).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        if values.len() < 2 {
            continue;
        }
        visited += 1;

        for pair in values.windows(2) {
            let threshold = (pair[0] + pair[1]) / 2.0;
            let (left, right): (Vec<usize>, Vec<usize>) = rows
                .iter()
                .partition(|&&row| samples[row].features[feature] <= threshold);
            let impurity = (left.len() as f64 * gini(samples, &left)
                + right.len() as f64 * gini(samples, &right))
                / rows.len() as f64;
            if best.as_ref().map_or(true, |current| impurity < current.impurity) {
                best = Some(BestSplit {
                    impurity,
                    feature,
                    threshold,
                    left,
                    right,
                });
            }
        }
    }

    match best {
        None => leaf(positives, rows.len()),
        Some(split) => {
            let left = grow(samples, &split.left, max_features, rng);
            let right = grow(samples, &split.right, max_features, rng);
            Node::Split {
                feature: split.feature,
                threshold: split.threshold,
                left: Box::new(left),
                right: Box::new(right),
            }
        }
    }
}

fn leaf(positives: usize, total: usize) -> Node {
    Node::Leaf {
        probability: positives as f64 / total as f64,
    }
}

fn count_positive(samples: &[Sample], rows: &[usize]) -> usize {
    rows.iter().filter(|&&row| samples[row].label == 1).count()
}

fn gini(samples: &[Sample], rows: &[usize]) -> f64 {
    let p = count_positive(samples, rows) as f64 / rows.len() as f64;
    1.0 - p * p - (1.0 - p) * (1.0 - p)
}
