//! CART regression tree.
//!
//! Splits minimize the summed squared error of the two children. Thresholds
//! sit at the midpoint between adjacent distinct feature values, and a
//! sample goes left when its value is `<= threshold`.
//!
//! # Reference
//!
//! Breiman, Friedman, Olshen & Stone (1984), *Classification and Regression Trees*

use rand::seq::SliceRandom;
use rand::Rng;

use super::config::ForestConfig;
use super::types::Dataset;

const SSE_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Candidate split found while scanning a node.
struct SplitCandidate {
    feature: usize,
    threshold: f64,
    sse: f64,
}

/// A fitted regression tree stored as a flat node arena (root at index 0).
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Grows a tree on `samples` (row indices into `data`, duplicates allowed).
    ///
    /// `rng` is only consulted when `config.max_features` restricts the
    /// candidate features at each node.
    pub fn fit<R: Rng>(
        data: &Dataset,
        samples: &[usize],
        config: &ForestConfig,
        rng: &mut R,
    ) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.grow(data, samples.to_vec(), 0, config, rng);
        tree
    }

    /// Predicts the label for one feature row.
    pub fn predict(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    /// Length of the longest root-to-leaf path (a lone leaf has depth 0).
    pub fn depth(&self) -> usize {
        self.depth_from(0)
    }

    fn depth_from(&self, idx: usize) -> usize {
        match &self.nodes[idx] {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => {
                1 + self.depth_from(*left).max(self.depth_from(*right))
            }
        }
    }

    fn grow<R: Rng>(
        &mut self,
        data: &Dataset,
        samples: Vec<usize>,
        depth: usize,
        config: &ForestConfig,
        rng: &mut R,
    ) -> usize {
        let idx = self.nodes.len();
        let mean = samples.iter().map(|&i| data.label(i)).sum::<f64>() / samples.len() as f64;
        self.nodes.push(Node::Leaf { value: mean });

        if config.max_depth.is_some_and(|d| depth >= d) {
            return idx;
        }

        let Some(split) = best_split(data, &samples, config, rng) else {
            return idx;
        };

        let (left_samples, right_samples): (Vec<usize>, Vec<usize>) = samples
            .iter()
            .partition(|&&i| data.row(i)[split.feature] <= split.threshold);

        let left = self.grow(data, left_samples, depth + 1, config, rng);
        let right = self.grow(data, right_samples, depth + 1, config, rng);
        self.nodes[idx] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        idx
    }
}

fn best_split<R: Rng>(
    data: &Dataset,
    samples: &[usize],
    config: &ForestConfig,
    rng: &mut R,
) -> Option<SplitCandidate> {
    let n = samples.len();
    if n < config.min_samples_split {
        return None;
    }

    let total_sum: f64 = samples.iter().map(|&i| data.label(i)).sum();
    let total_sq: f64 = samples.iter().map(|&i| data.label(i).powi(2)).sum();
    let parent_sse = total_sq - total_sum * total_sum / n as f64;
    if parent_sse <= SSE_EPSILON {
        return None; // pure node
    }

    let width = data.width();
    let mut features: Vec<usize> = (0..width).collect();
    if let Some(k) = config.max_features.filter(|&k| k < width) {
        features.shuffle(rng);
        features.truncate(k);
    }

    let mut best: Option<SplitCandidate> = None;
    let mut order = samples.to_vec();

    for &feature in &features {
        order.sort_by(|&a, &b| data.row(a)[feature].total_cmp(&data.row(b)[feature]));

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;
        for pos in 0..n - 1 {
            let y = data.label(order[pos]);
            left_sum += y;
            left_sq += y * y;

            let x = data.row(order[pos])[feature];
            let next = data.row(order[pos + 1])[feature];
            if next <= x {
                continue;
            }

            let left_n = pos + 1;
            let right_n = n - left_n;
            if left_n < config.min_samples_leaf || right_n < config.min_samples_leaf {
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let sse = (left_sq - left_sum * left_sum / left_n as f64)
                + (right_sq - right_sum * right_sum / right_n as f64);

            if best.as_ref().is_none_or(|b| sse < b.sse - SSE_EPSILON) {
                best = Some(SplitCandidate {
                    feature,
                    threshold: (x + next) / 2.0,
                    sse,
                });
            }
        }
    }

    best
}
