use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::sets::traversed::EdgeSet;

/// One snapshot of an A* run, taken right after a node was extracted from the open set.
///
/// `path` starts at the extracted node and follows predecessors back to the start node,
/// so the start is always the last element. `traversed` is a copy of every edge the
/// search had examined up to that moment; later progress never alters an older frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Eq + Hash + Clone"
))]
pub struct Frame<T>
where
    T: Eq + Hash + Clone,
{
    pub path: Vec<T>,
    pub traversed: EdgeSet<T>,
}

impl<T> Frame<T>
where
    T: Eq + Hash + Clone,
{
    /// The node this frame was taken for.
    pub fn head(&self) -> Option<&T> {
        self.path.first()
    }

    /// Sums `distance` over consecutive nodes of the path.
    pub fn path_cost<D>(&self, mut distance: D) -> f64
    where
        D: FnMut(&T, &T) -> f64,
    {
        self.path
            .windows(2)
            .map(|pair| distance(&pair[1], &pair[0]))
            .sum()
    }
}
