//! Training data container.

use crate::error::PrioError;

/// A rectangular regression dataset: `n` rows of `width` features, one
/// label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
    width: usize,
}

impl Dataset {
    /// Builds a dataset, rejecting empty, ragged, or mismatched input.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_taskprio::forest::Dataset;
    ///
    /// let data = Dataset::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![0.5, 1.5]).unwrap();
    /// assert_eq!(data.len(), 2);
    /// assert_eq!(data.width(), 2);
    /// ```
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Self, PrioError> {
        if features.is_empty() {
            return Err(PrioError::InvalidDataset("no rows".into()));
        }
        if features.len() != labels.len() {
            return Err(PrioError::InvalidDataset(format!(
                "{} rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        let width = features[0].len();
        if width == 0 {
            return Err(PrioError::InvalidDataset("rows have no features".into()));
        }
        if let Some(i) = features.iter().position(|row| row.len() != width) {
            return Err(PrioError::InvalidDataset(format!(
                "row {i} has {} features, expected {width}",
                features[i].len()
            )));
        }
        Ok(Self {
            features,
            labels,
            width,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of features per row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.features[i]
    }

    pub fn label(&self, i: usize) -> f64 {
        self.labels[i]
    }
}
