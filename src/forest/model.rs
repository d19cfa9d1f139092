//! Bagged ensemble of regression trees.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::config::ForestConfig;
use super::tree::RegressionTree;
use super::types::Dataset;
use crate::error::PrioError;

/// A fitted random forest regressor.
///
/// The prediction is the unweighted mean of all tree predictions, so it
/// always lies within the range of the training labels.
///
/// # Examples
///
/// ```
/// use u_taskprio::forest::{Dataset, ForestConfig, RandomForest};
///
/// let data = Dataset::new(
///     vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
///     vec![1.0, 2.0, 3.0, 4.0],
/// ).unwrap();
/// let forest = RandomForest::fit(&data, &ForestConfig::default().with_seed(42)).unwrap();
/// let y = forest.predict(&[2.5]);
/// assert!((1.0..=4.0).contains(&y));
/// ```
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
    width: usize,
    seed: u64,
}

impl RandomForest {
    /// Fits the forest.
    ///
    /// One seed per tree is drawn up front from the master RNG, so the
    /// result does not depend on whether trees are grown in parallel.
    pub fn fit(data: &Dataset, config: &ForestConfig) -> Result<Self, PrioError> {
        config.validate().map_err(PrioError::InvalidConfig)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let tree_seeds: Vec<u64> = (0..config.n_trees).map(|_| rng.random()).collect();

        let trees = fit_trees(data, config, &tree_seeds);

        debug!(
            n_trees = trees.len(),
            rows = data.len(),
            width = data.width(),
            seed,
            "random forest fitted"
        );

        Ok(Self {
            trees,
            width: data.width(),
            seed,
        })
    }

    /// Predicts the label for one feature row.
    ///
    /// # Panics
    /// Panics if `row` is shorter than the training width.
    pub fn predict(&self, row: &[f64]) -> f64 {
        assert!(
            row.len() >= self.width,
            "expected {} features, got {}",
            self.width,
            row.len()
        );
        let sum: f64 = self.trees.iter().map(|t| t.predict(row)).sum();
        sum / self.trees.len() as f64
    }

    /// Number of trees in the ensemble.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Number of features expected per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Seed actually used for fitting (drawn at random when the config had none).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

fn fit_one(data: &Dataset, config: &ForestConfig, seed: u64) -> RegressionTree {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = data.len();
    let samples: Vec<usize> = if config.bootstrap {
        (0..n).map(|_| rng.random_range(0..n)).collect()
    } else {
        (0..n).collect()
    };
    RegressionTree::fit(data, &samples, config, &mut rng)
}

#[cfg(feature = "parallel")]
fn fit_trees(data: &Dataset, config: &ForestConfig, seeds: &[u64]) -> Vec<RegressionTree> {
    if config.parallel {
        seeds
            .par_iter()
            .map(|&s| fit_one(data, config, s))
            .collect()
    } else {
        seeds.iter().map(|&s| fit_one(data, config, s)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn fit_trees(data: &Dataset, config: &ForestConfig, seeds: &[u64]) -> Vec<RegressionTree> {
    seeds.iter().map(|&s| fit_one(data, config, s)).collect()
}
