//! Specialized data structures for instrumented graph search.
//!
//! # Submodules
//!
//! - [`candidates`]: The indexed min-heap used as the A* open set, and its entries
//! - [`fixed`]: Immutable neighbor lists for graph nodes
//! - [`traversed`]: Undirected edge sets recording every edge a search examined

pub mod candidates;
pub mod fixed;
pub mod traversed;
