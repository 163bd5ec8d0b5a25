//! Bit-per-cell occupancy snapshots
//!
//! An [`Occupancy`] records the blocked/free state of every cell in persisted
//! traversal order (X outer, Y middle, Z inner). A set bit means blocked,
//! matching the flag written to disk. Loads parse into a snapshot first so a
//! malformed stream never touches the live grid.

use bitvec::prelude::*;

use crate::io::error::Result;
use crate::spatial::extent::HalfExtents;

/// Blocked/free state of every cell of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    extents: HalfExtents,
    blocked: BitVec,
}

impl Occupancy {
    /// Snapshot with every cell blocked
    pub fn all_blocked(extents: HalfExtents) -> Self {
        Self {
            extents,
            blocked: bitvec![1; extents.slot_count()],
        }
    }

    /// Snapshot with every cell free
    pub fn all_free(extents: HalfExtents) -> Self {
        Self {
            extents,
            blocked: bitvec![0; extents.slot_count()],
        }
    }

    /// Build a snapshot from blocked flags already in traversal order
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`](crate::io::error::GridError::InvalidParameter) if the flag count does not match
    /// the number of cells
    pub fn from_flags(extents: HalfExtents, blocked: BitVec) -> Result<Self> {
        if blocked.len() != extents.slot_count() {
            return Err(crate::io::error::invalid_parameter(
                "blocked",
                &blocked.len(),
                &format!("expected {} flags for {extents}", extents.slot_count()),
            ));
        }
        Ok(Self { extents, blocked })
    }

    /// Extents the snapshot covers
    pub const fn extents(&self) -> HalfExtents {
        self.extents
    }

    /// Number of cells covered
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Test if the snapshot covers no cells
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Blocked state of a cell, `None` outside the extents
    pub fn is_blocked(&self, cell: [i32; 3]) -> Option<bool> {
        let index = self.extents.traversal_index(cell)?;
        self.blocked.get(index).as_deref().copied()
    }

    /// Set the blocked state of a cell
    ///
    /// Returns `false` without changing anything when the cell is outside the extents.
    pub fn set_blocked(&mut self, cell: [i32; 3], blocked: bool) -> bool {
        match self.extents.traversal_index(cell) {
            Some(index) if index < self.blocked.len() => {
                self.blocked.set(index, blocked);
                true
            }
            _ => false,
        }
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.blocked.count_ones()
    }

    /// Number of free cells
    pub fn free_count(&self) -> usize {
        self.blocked.count_zeros()
    }

    /// Blocked flags in traversal order
    pub fn flags(&self) -> &BitSlice {
        &self.blocked
    }

    /// Every cell with its blocked flag, in traversal order
    pub fn iter(&self) -> impl Iterator<Item = ([i32; 3], bool)> + '_ {
        self.extents.cells().zip(self.blocked.iter().by_vals())
    }
}
