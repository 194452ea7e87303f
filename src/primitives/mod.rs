//! Core compute primitives (Vector, Matrix).
//!
//! These types provide the foundation for the clustering algorithms.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
