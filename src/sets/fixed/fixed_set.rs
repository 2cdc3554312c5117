use std::fmt::Debug;

use crate::search::NodeId;

/// An immutable list of neighbor ids for a node of a [`PointGraph`](crate::search::PointGraph).
///
/// The generator wires nodes with growable vectors and freezes each list into a
/// `FixedNeighbors` once wiring is complete. The list keeps wiring order and may
/// contain repeats when the graph was wired with random edges.
#[derive(Clone, PartialEq, Eq)]
pub struct FixedNeighbors {
    neighbors: Box<[NodeId]>,
}

impl FixedNeighbors {
    /// Creates a new fixed neighbor list from node ids, keeping their order.
    pub fn new(initial_values: Vec<NodeId>) -> Self {
        FixedNeighbors {
            neighbors: initial_values.into_boxed_slice(),
        }
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

impl From<Vec<NodeId>> for FixedNeighbors {
    fn from(values: Vec<NodeId>) -> Self {
        FixedNeighbors::new(values)
    }
}

impl Debug for FixedNeighbors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedNeighbors")
            .field("neighbors", &self.neighbors)
            .finish()
    }
}
