//! Random forest configuration.

/// Configuration for [`RandomForest`](super::RandomForest) fitting.
///
/// Defaults mirror the common regression-forest convention: 100 fully
/// grown trees on bootstrap samples, every feature considered at each split.
///
/// # Examples
///
/// ```
/// use u_taskprio::forest::ForestConfig;
///
/// let config = ForestConfig::default()
///     .with_n_trees(50)
///     .with_max_depth(4)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForestConfig {
    /// Number of trees in the ensemble.
    pub n_trees: usize,

    /// Maximum tree depth. `None` grows until leaves are pure or the
    /// sample minima stop splitting.
    pub max_depth: Option<usize>,

    /// Minimum number of samples a node needs before it may split.
    pub min_samples_split: usize,

    /// Minimum number of samples each child of a split must keep.
    pub min_samples_leaf: usize,

    /// Features drawn (without replacement) as split candidates per node.
    ///
    /// `None` = all features.
    pub max_features: Option<usize>,

    /// Whether each tree trains on a bootstrap resample of the data.
    pub bootstrap: bool,

    /// Whether to fit trees in parallel using rayon.
    ///
    /// Only honored with the `parallel` cargo feature. Results are identical
    /// either way since every tree gets its own pre-drawn seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: None,
            bootstrap: true,
            parallel: false,
            seed: None,
        }
    }
}

impl ForestConfig {
    pub fn with_n_trees(mut self, n: usize) -> Self {
        self.n_trees = n;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_min_samples_split(mut self, n: usize) -> Self {
        self.min_samples_split = n;
        self
    }

    pub fn with_min_samples_leaf(mut self, n: usize) -> Self {
        self.min_samples_leaf = n;
        self
    }

    pub fn with_max_features(mut self, n: usize) -> Self {
        self.max_features = Some(n);
        self
    }

    pub fn with_bootstrap(mut self, bootstrap: bool) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_trees == 0 {
            return Err("n_trees must be at least 1".into());
        }
        if self.max_depth == Some(0) {
            return Err("max_depth must be at least 1 when set".into());
        }
        if self.min_samples_split < 2 {
            return Err(format!(
                "min_samples_split must be at least 2, got {}",
                self.min_samples_split
            ));
        }
        if self.min_samples_leaf == 0 {
            return Err("min_samples_leaf must be at least 1".into());
        }
        if self.max_features == Some(0) {
            return Err("max_features must be at least 1 when set".into());
        }
        Ok(())
    }
}
