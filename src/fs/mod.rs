//! File output for search results.
//!
//! This module renders a search on a [`PointGraph`](crate::search::PointGraph) into an
//! animated SVG, and dumps search outcomes as JSON for other tools.

mod frame_dump;
mod svg;

pub use frame_dump::*;
pub use svg::*;
