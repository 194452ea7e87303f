//! Group formation from student skill vectors.
//!
//! Wraps [`KMeans`] with the roster-facing policy: target group size to
//! cluster count, zero-padding of ragged skill vectors, and dense 1-based
//! group numbering in first-seen input order.

use crate::cluster::KMeans;
use crate::error::{AgruparError, Result};
use crate::primitives::Matrix;
use crate::roster::Student;
use crate::traits::UnsupervisedEstimator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A student annotated with its final cluster and display group number.
///
/// `cluster` is the internal k-means index (0..k, not necessarily all
/// populated); `group_number` is 1-based and densely packed, assigned in the
/// order each cluster first appears while scanning students in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteredStudent {
    /// The original student, name and skills unchanged.
    pub student: Student,
    /// Internal cluster index.
    pub cluster: usize,
    /// Dense 1-based group number for display.
    pub group_number: usize,
}

/// Partitions students into groups of similar skill profiles.
///
/// # Examples
///
/// ```
/// use agrupar::prelude::*;
///
/// let students = vec![
///     Student::new("Alice", vec![5.0, 1.0]),
///     Student::new("Bob", vec![4.0, 2.0]),
///     Student::new("Carol", vec![1.0, 5.0]),
///     Student::new("Dave", vec![2.0, 4.0]),
/// ];
///
/// let groups = Grouper::new(2).with_random_state(42).assign(&students).unwrap();
/// assert_eq!(groups.len(), 4);
/// assert_eq!(groups[0].group_number, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Grouper {
    group_size: usize,
    max_iter: usize,
    random_state: Option<u64>,
}

impl Grouper {
    /// Creates a grouper targeting the given group size.
    #[must_use]
    pub fn new(group_size: usize) -> Self {
        Self {
            group_size,
            max_iter: 100,
            random_state: None,
        }
    }

    /// Sets the maximum number of clustering iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the random seed for reproducible grouping.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Returns the cluster count for `n_students`: `max(1, round(n / group_size))`.
    ///
    /// # Errors
    ///
    /// Returns an error if the group size is zero.
    pub fn n_clusters(&self, n_students: usize) -> Result<usize> {
        if self.group_size == 0 {
            return Err(AgruparError::invalid_hyperparameter(
                "group_size",
                self.group_size,
                ">= 1",
            ));
        }
        let k = (n_students as f64 / self.group_size as f64).round() as usize;
        Ok(k.max(1))
    }

    /// Partitions students into skill-based groups.
    ///
    /// Every input student appears exactly once in the output, in input
    /// order, with name and skills unchanged. An empty input yields an empty
    /// result. Students with fewer skill values than their peers are padded
    /// with zeros for the distance computation.
    ///
    /// # Errors
    ///
    /// Returns an error if the group size is zero.
    pub fn assign(&self, students: &[Student]) -> Result<Vec<ClusteredStudent>> {
        let k = self.n_clusters(students.len())?;
        if students.is_empty() {
            return Ok(Vec::new());
        }

        let x = feature_matrix(students);

        let mut kmeans = KMeans::new(k).with_max_iter(self.max_iter);
        if let Some(seed) = self.random_state {
            kmeans = kmeans.with_random_state(seed);
        }
        kmeans.fit(&x)?;
        let labels = kmeans.labels();

        // Remap cluster indices to dense 1-based group numbers in the order
        // each cluster is first seen, scanning students in input order.
        let mut group_of: HashMap<usize, usize> = HashMap::new();
        let mut next_group = 1;
        let mut clustered = Vec::with_capacity(students.len());

        for (student, &cluster) in students.iter().zip(labels) {
            let group_number = *group_of.entry(cluster).or_insert_with(|| {
                let g = next_group;
                next_group += 1;
                g
            });
            clustered.push(ClusteredStudent {
                student: student.clone(),
                cluster,
                group_number,
            });
        }

        Ok(clustered)
    }
}

/// Stacks student skill vectors into a feature matrix, zero-padding shorter
/// rows to the widest vector.
fn feature_matrix(students: &[Student]) -> Matrix<f32> {
    let n_features = students.iter().map(|s| s.skills.len()).max().unwrap_or(0);

    let mut data = Vec::with_capacity(students.len() * n_features);
    for student in students {
        data.extend_from_slice(&student.skills);
        data.extend(std::iter::repeat(0.0).take(n_features - student.skills.len()));
    }

    Matrix::from_vec(students.len(), n_features, data)
        .expect("Internal error: feature matrix size mismatch")
}
