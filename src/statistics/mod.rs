//! Counters describing how much work an A* run performed.
//!
//! The engine fills a [`SearchStats`] while it searches: nodes extracted, edges
//! examined, relaxations and how many of them actually reached the open set,
//! and frames recorded.

mod stats;
pub use stats::*;
