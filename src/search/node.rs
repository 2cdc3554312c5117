use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::sets::fixed::FixedNeighbors;

/// Index of a node inside a [`PointGraph`](crate::search::PointGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId {
    pub internal: usize,
}

impl From<usize> for NodeId {
    fn from(internal: usize) -> Self {
        NodeId { internal }
    }
}

/// A position on the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

pub struct Node {
    pub position: Point,
    pub neighbors: FixedNeighbors,
}

impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("position", &self.position)
            .field("neighbors", &self.neighbors)
            .finish()
    }
}
