//! Spatial data structures and coordinate mapping
//!
//! This module contains the grid itself together with its supporting pieces:
//! - Half-extent validation and coordinate/index mapping
//! - Cell markers that flag traversable cells
//! - Bit-per-cell occupancy snapshots used for persistence
//! - Seeded random population of test maps

/// Half-extents, bounds checks and the linear slot index
pub mod extent;
/// Dense grid of optional cell markers
pub mod grid;
/// Markers stored in free cells
pub mod node;
/// Occupancy snapshots in persisted traversal order
pub mod occupancy;
/// Random occupancy generation
pub mod populate;

pub use extent::HalfExtents;
pub use grid::SpatialGrid;
pub use node::{CellMarker, Node};
pub use occupancy::Occupancy;
