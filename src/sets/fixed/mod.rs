//! Immutable neighbor lists for graph nodes.

mod fixed_set;

pub use fixed_set::*;
