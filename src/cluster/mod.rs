//! Clustering algorithms.
//!
//! Includes K-Means clustering with random data-point initialization.

mod kmeans;

pub use kmeans::KMeans;
