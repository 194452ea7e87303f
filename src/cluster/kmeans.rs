//! K-Means clustering algorithm.
//!
//! Uses Lloyd's algorithm with randomly chosen data points as initial centroids.

use crate::error::{AgruparError, Result};
use crate::metrics::inertia;
use crate::primitives::Matrix;
use crate::traits::UnsupervisedEstimator;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// K-Means clustering algorithm.
///
/// # Algorithm
///
/// 1. Seed centroids with a random permutation of the data rows (first k taken)
/// 2. Assign each sample to its nearest centroid (squared Euclidean distance,
///    ties broken by lowest centroid index)
/// 3. Update each centroid to the mean of its assigned samples; a centroid with
///    no assigned samples keeps its previous coordinates
/// 4. Repeat 2-3 until the assignment vector stops changing or `max_iter`
///    iterations have elapsed
///
/// # Examples
///
/// ```
/// use agrupar::prelude::*;
///
/// let data = Matrix::from_vec(6, 2, vec![
///     1.0, 2.0,
///     1.5, 1.8,
///     5.0, 8.0,
///     8.0, 8.0,
///     1.0, 0.6,
///     9.0, 11.0,
/// ]).unwrap();
///
/// let mut kmeans = KMeans::new(2).with_random_state(42);
/// kmeans.fit(&data).unwrap();
///
/// let labels = kmeans.predict(&data);
/// assert_eq!(labels.len(), 6);
/// ```
///
/// # Performance
///
/// - Time complexity: O(nkdi) where n=samples, k=clusters, d=features, i=iterations
/// - Space complexity: O(nk)
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Number of clusters.
    n_clusters: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Random seed for initialization.
    random_state: Option<u64>,
    /// Cluster centroids after fitting.
    centroids: Option<Matrix<f32>>,
    /// Labels for training data.
    labels: Option<Vec<usize>>,
    /// Sum of squared distances (inertia).
    inertia: f32,
    /// Number of iterations run.
    n_iter: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(8)
    }
}

impl KMeans {
    /// Creates a new K-Means with the specified number of clusters.
    #[must_use]
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: 100,
            random_state: None,
            centroids: None,
            labels: None,
            inertia: 0.0,
            n_iter: 0,
        }
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the random seed for reproducible initialization.
    ///
    /// Without a seed, centroid seeding uses the thread-local RNG and results
    /// legitimately differ between runs.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Returns the number of clusters.
    #[must_use]
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Returns the cluster centroids.
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted.
    #[must_use]
    pub fn centroids(&self) -> &Matrix<f32> {
        self.centroids
            .as_ref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Returns the labels assigned to the training data.
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        self.labels
            .as_deref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Returns the inertia (within-cluster sum of squares).
    #[must_use]
    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Returns the number of iterations run.
    #[must_use]
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.centroids.is_some()
    }

    /// Seeds centroids with k distinct data rows from a random permutation.
    fn random_centroids(&self, x: &Matrix<f32>) -> Matrix<f32> {
        let (n_samples, n_features) = x.shape();

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if let Some(seed) = self.random_state {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            indices.shuffle(&mut rng);
        } else {
            let mut rng = rand::thread_rng();
            indices.shuffle(&mut rng);
        }

        let mut data = Vec::with_capacity(self.n_clusters * n_features);
        for &i in indices.iter().take(self.n_clusters) {
            for j in 0..n_features {
                data.push(x.get(i, j));
            }
        }

        Matrix::from_vec(self.n_clusters, n_features, data)
            .expect("Internal error: centroid matrix creation failed")
    }

    /// Assigns each sample to the nearest centroid.
    ///
    /// Ties go to the lowest centroid index: only a strictly smaller
    /// distance replaces the current candidate.
    fn assign_labels(&self, x: &Matrix<f32>, centroids: &Matrix<f32>) -> Vec<usize> {
        let n_samples = x.n_rows();
        let mut labels = vec![0; n_samples];

        for (i, label) in labels.iter_mut().enumerate() {
            let point = x.row(i);
            let mut min_dist = f32::INFINITY;
            let mut min_cluster = 0;

            for k in 0..self.n_clusters {
                let centroid = centroids.row(k);
                let dist = (&point - &centroid).norm_squared();

                if dist < min_dist {
                    min_dist = dist;
                    min_cluster = k;
                }
            }

            *label = min_cluster;
        }

        labels
    }

    /// Updates centroids as the mean of assigned samples.
    ///
    /// A cluster that lost all its members keeps its previous centroid
    /// rather than being re-seeded or dropped.
    fn update_centroids(
        &self,
        x: &Matrix<f32>,
        labels: &[usize],
        previous: &Matrix<f32>,
    ) -> Matrix<f32> {
        let (_, n_features) = x.shape();
        let mut sums = vec![0.0; self.n_clusters * n_features];
        let mut counts = vec![0usize; self.n_clusters];

        for (i, &label) in labels.iter().enumerate() {
            counts[label] += 1;
            for j in 0..n_features {
                sums[label * n_features + j] += x.get(i, j);
            }
        }

        for k in 0..self.n_clusters {
            if counts[k] > 0 {
                for j in 0..n_features {
                    sums[k * n_features + j] /= counts[k] as f32;
                }
            } else {
                for j in 0..n_features {
                    sums[k * n_features + j] = previous.get(k, j);
                }
            }
        }

        Matrix::from_vec(self.n_clusters, n_features, sums)
            .expect("Internal error: centroid update failed")
    }
}

impl UnsupervisedEstimator for KMeans {
    type Labels = Vec<usize>;

    /// Fits the K-Means model to data.
    ///
    /// After a successful fit, `labels()` equals `predict()` on the training
    /// data: the stored labels are exactly the nearest-centroid assignment
    /// under the stored centroids.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `n_clusters` is zero
    /// - Data is empty
    /// - Data has fewer samples than clusters
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let n_samples = x.n_rows();

        if self.n_clusters == 0 {
            return Err(AgruparError::invalid_hyperparameter(
                "n_clusters",
                self.n_clusters,
                ">= 1",
            ));
        }
        if n_samples == 0 {
            return Err(AgruparError::empty_input("cannot fit on zero samples"));
        }
        if n_samples < self.n_clusters {
            return Err(AgruparError::invalid_hyperparameter(
                "n_clusters",
                self.n_clusters,
                "<= number of samples",
            ));
        }

        let mut centroids = self.random_centroids(x);
        let mut labels = self.assign_labels(x, &centroids);
        self.n_iter = 0;

        for _ in 0..self.max_iter {
            let new_centroids = self.update_centroids(x, &labels, &centroids);
            let new_labels = self.assign_labels(x, &new_centroids);
            self.n_iter += 1;

            // Converged: the updated centroids reproduce the same labels,
            // so adopting them keeps labels == assign(centroids).
            if new_labels == labels {
                centroids = new_centroids;
                break;
            }

            centroids = new_centroids;
            labels = new_labels;
        }

        self.inertia = inertia(x, &centroids, &labels);
        self.labels = Some(labels);
        self.centroids = Some(centroids);

        Ok(())
    }

    /// Predicts cluster labels for new data.
    fn predict(&self, x: &Matrix<f32>) -> Vec<usize> {
        let centroids = self
            .centroids
            .as_ref()
            .expect("Model not fitted. Call fit() first.");

        self.assign_labels(x, centroids)
    }
}
