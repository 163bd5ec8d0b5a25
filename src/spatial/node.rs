//! Markers stored in free cells
//!
//! A grid slot holding a marker is traversable; an empty slot is blocked.
//! The grid creates markers itself when it allocates free cells during a
//! load, so marker types expose a constructor from a cell coordinate.

use crate::math::vector::Vector4;

/// A value that can occupy a free grid cell
pub trait CellMarker {
    /// Create a marker positioned exactly at an integer cell
    fn at_cell(cell: [i32; 3]) -> Self;

    /// Position carried by this marker
    fn position(&self) -> Vector4;
}

/// Default marker: a traversable position in space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Cell position with `w = 1`; the homogeneous component is not used for addressing
    pub position: Vector4,
}

impl Node {
    /// Create a node at an arbitrary position
    pub const fn new(position: Vector4) -> Self {
        Self { position }
    }
}

impl CellMarker for Node {
    fn at_cell(cell: [i32; 3]) -> Self {
        Self::new(Vector4::from_cell(cell))
    }

    fn position(&self) -> Vector4 {
        self.position
    }
}
