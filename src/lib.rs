//! Agrupar: skill-based student grouping in pure Rust.
//!
//! Agrupar parses a student roster from CSV text and partitions the students
//! into groups of similar skill profiles using k-means clustering.
//!
//! # Quick Start
//!
//! ```
//! use agrupar::prelude::*;
//!
//! let csv = "\
//! name,math,coding,writing
//! Alice,5,1,3
//! Bob,4,2,3
//! Carol,1,5,2
//! Dave,2,4,1";
//!
//! let roster = Roster::parse(csv);
//! assert_eq!(roster.len(), 4);
//! assert_eq!(roster.skill_headers(), ["math", "coding", "writing"]);
//!
//! let groups = Grouper::new(2)
//!     .with_random_state(42)
//!     .assign(roster.students())
//!     .unwrap();
//!
//! assert_eq!(groups.len(), 4);
//! for g in &groups {
//!     assert!(g.group_number >= 1 && g.group_number <= 2);
//! }
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`roster`]: CSV roster parsing into [`roster::Student`] records
//! - [`cluster`]: K-Means clustering over skill vectors
//! - [`grouping`]: Group formation and 1-based group numbering
//! - [`metrics`]: Clustering quality metrics (inertia)

pub mod cluster;
pub mod error;
pub mod grouping;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod roster;
pub mod traits;

pub use error::{AgruparError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::UnsupervisedEstimator;
