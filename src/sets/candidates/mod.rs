//! Open-set structures for best-first graph search.
//!
//! This module provides the scored entries of the A* open set, a totally ordered
//! floating-point key, and the indexed min-heap that holds them with O(1)
//! membership checks.

mod candidate_entry;
mod indexed_heap;
mod ordered_float;

pub use candidate_entry::*;
pub use indexed_heap::*;
pub use ordered_float::*;
