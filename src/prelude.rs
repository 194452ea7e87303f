//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use agrupar::prelude::*;
//! ```

pub use crate::cluster::KMeans;
pub use crate::grouping::{ClusteredStudent, Grouper};
pub use crate::metrics::inertia;
pub use crate::primitives::{Matrix, Vector};
pub use crate::roster::{Roster, Student};
pub use crate::traits::UnsupervisedEstimator;
