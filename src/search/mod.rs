//! A* search with frame capture, and the point graphs it is demonstrated on.
//!
//! [`solve`] and [`solve_with`] work on any node type that can be hashed and
//! compared; [`PointGraph`] is a generated graph of points on a canvas whose
//! search frames can be rendered by [`crate::fs`].

mod astar;
mod frame;
mod node;
mod point_graph;
mod wiring_mode;

pub use astar::*;
pub use frame::*;
pub use node::*;
pub use point_graph::*;
pub use wiring_mode::*;
