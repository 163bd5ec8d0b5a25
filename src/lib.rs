//! Dense origin-centred 3D occupancy grid used as the search space for A*-style pathfinding
//!
//! Every integer coordinate inside the grid's half-extents maps to one storage slot in O(1).
//! A slot holding a marker is a free cell; an empty slot is a blocked cell. The whole
//! occupancy field can be written to and read back from a whitespace-delimited text stream.

#![forbid(unsafe_code)]

/// Text persistence, error handling, configuration and the command-line front end
pub mod io;
/// Vector and rounding helpers for continuous positions
pub mod math;
/// Grid storage, coordinate mapping and cell markers
pub mod spatial;

pub use io::error::{GridError, Result};
pub use math::vector::Vector4;
pub use spatial::{CellMarker, HalfExtents, Node, Occupancy, SpatialGrid};
