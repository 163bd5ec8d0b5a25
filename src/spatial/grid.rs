//! Dense origin-centred grid of optional cell markers
//!
//! The grid owns one slot per valid coordinate. A slot holding a marker is a
//! free (traversable) cell positioned at that coordinate; an empty slot is a
//! blocked cell. Storage is an `ndarray::Array3` shaped `(2hh+1, 2hw+1, 2hd+1)`
//! and indexed `[y, x, z]`, so its standard memory layout matches
//! [`HalfExtents::linear_index`] exactly.
//!
//! Markers live inline as `Option<M>`; releasing a marker is dropping it.
//! Writes hand the previous marker back to the caller instead of leaking it.
//!
//! The grid has no internal synchronisation. Shared reads go through `&self`
//! and every write needs `&mut self`, so concurrent read/write cannot compile;
//! callers that share a grid across threads must wrap it in their own lock.

use std::io::{Read, Write};

use ndarray::Array3;
use tracing::debug;

use crate::io::error::{GridError, Result};
use crate::io::format::{read_occupancy, write_flags, write_header};
use crate::math::rounding::snap_position;
use crate::math::vector::Vector4;
use crate::spatial::extent::HalfExtents;
use crate::spatial::node::{CellMarker, Node};
use crate::spatial::occupancy::Occupancy;

/// Dense 3D occupancy grid centred on the origin
#[derive(Debug, Clone)]
pub struct SpatialGrid<M = Node> {
    extents: HalfExtents,
    /// `None` until the grid is sized; every accessor treats that as "no valid coordinates"
    storage: Option<Array3<Option<M>>>,
}

impl<M> Default for SpatialGrid<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> SpatialGrid<M> {
    /// Create an empty grid with zero extents and no storage
    pub const fn new() -> Self {
        Self {
            extents: HalfExtents::ZERO,
            storage: None,
        }
    }

    /// Create a grid spanning `[-x, x] x [-y, y] x [-z, z]` with every cell blocked
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidExtent`] if a half-extent exceeds
    /// [`crate::io::configuration::MAX_HALF_EXTENT`]
    pub fn with_half_extents(x: u32, y: u32, z: u32) -> Result<Self> {
        let extents = HalfExtents::new(x, y, z)?;
        let mut grid = Self::new();
        grid.allocate(extents);
        Ok(grid)
    }

    /// Half-extents of the grid; zero when no storage is allocated
    pub const fn half_extents(&self) -> HalfExtents {
        self.extents
    }

    /// Full extents `(2hw, 2hh, 2hd)` along X, Y and Z
    pub const fn dimensions(&self) -> (u32, u32, u32) {
        (
            self.extents.width(),
            self.extents.height(),
            self.extents.depth(),
        )
    }

    /// Check whether storage has been allocated
    pub const fn is_allocated(&self) -> bool {
        self.storage.is_some()
    }

    /// Number of storage slots; zero when no storage is allocated
    pub fn slot_count(&self) -> usize {
        self.storage.as_ref().map_or(0, |storage| storage.len())
    }

    /// Check whether a coordinate addresses a slot of this grid
    pub const fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.is_allocated() && self.extents.contains([x, y, z])
    }

    /// Release every marker and the storage, leaving a zero-extent grid
    ///
    /// Returns the number of markers released. Calling this on a grid without
    /// storage does nothing and returns zero.
    pub fn destroy(&mut self) -> usize {
        let Some(storage) = self.storage.take() else {
            return 0;
        };

        let released = storage.iter().filter(|slot| slot.is_some()).count();
        let extents = std::mem::replace(&mut self.extents, HalfExtents::ZERO);
        drop(storage);

        debug!(%extents, released, "released grid storage");
        released
    }

    /// Overwrite the slot at a coordinate, returning the marker it held
    ///
    /// Passing `None` blocks the cell. The previous marker is handed back
    /// rather than released, so callers decide whether to reuse or drop it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfBounds`] if the coordinate lies outside the
    /// extents or the grid has no storage; the grid is left unchanged
    pub fn set_node(&mut self, x: i32, y: i32, z: i32, marker: Option<M>) -> Result<Option<M>> {
        let slot = self.slot_mut([x, y, z])?;
        Ok(std::mem::replace(slot, marker))
    }

    /// Block a cell, returning the marker it held
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfBounds`] if the coordinate is not a slot of this grid
    pub fn block_cell(&mut self, x: i32, y: i32, z: i32) -> Result<Option<M>> {
        self.set_node(x, y, z, None)
    }

    /// Remove and return the marker at a coordinate, blocking the cell
    ///
    /// Returns `None` for blocked cells and for coordinates outside the grid.
    pub fn take_node(&mut self, x: i32, y: i32, z: i32) -> Option<M> {
        self.slot_mut([x, y, z]).ok()?.take()
    }

    /// Marker at a coordinate, `None` when the cell is blocked or out of range
    pub fn get_node(&self, x: i32, y: i32, z: i32) -> Option<&M> {
        self.slot([x, y, z])?.as_ref()
    }

    /// Mutable marker at a coordinate, `None` when the cell is blocked or out of range
    pub fn get_node_mut(&mut self, x: i32, y: i32, z: i32) -> Option<&mut M> {
        let index = self.extents.storage_index([x, y, z])?;
        self.storage.as_mut()?.get_mut(index)?.as_mut()
    }

    /// Marker at the cell nearest to a continuous position
    ///
    /// Each of the first three components is rounded half up (`floor(v + 0.5)`);
    /// the homogeneous component is ignored. Non-finite positions address no cell.
    pub fn get_node_at(&self, position: &Vector4) -> Option<&M> {
        let [x, y, z] = snap_position(position.xyz())?;
        self.get_node(x, y, z)
    }

    /// Check whether a cell is traversable
    pub fn is_free(&self, x: i32, y: i32, z: i32) -> bool {
        self.get_node(x, y, z).is_some()
    }

    /// Number of free cells
    pub fn free_count(&self) -> usize {
        self.storage
            .as_ref()
            .map_or(0, |storage| storage.iter().filter(|slot| slot.is_some()).count())
    }

    /// Free cells with their markers, in storage order (Y slowest, Z fastest)
    pub fn free_cells(&self) -> impl Iterator<Item = ([i32; 3], &M)> + '_ {
        let extents = self.extents;
        self.storage
            .iter()
            .flat_map(|storage| storage.indexed_iter())
            .filter_map(move |((row, col, layer), slot)| {
                slot.as_ref()
                    .map(|marker| (extents.coordinate_from_storage([row, col, layer]), marker))
            })
    }

    /// Snapshot of the occupancy field, `None` when no storage is allocated
    pub fn occupancy(&self) -> Option<Occupancy> {
        self.storage.as_ref()?;
        let mut occupancy = Occupancy::all_blocked(self.extents);
        for (cell, _) in self.free_cells() {
            occupancy.set_blocked(cell, false);
        }
        Some(occupancy)
    }

    /// Write the occupancy field as text
    ///
    /// Emits the three half-extents on separate lines, then one `1` (blocked)
    /// or `0` (free) flag per cell in X-outer/Y-middle/Z-inner order, each
    /// followed by a space. A grid without storage writes only the header.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Io`] if the writer fails
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_header(writer, self.extents)?;
        if self.storage.is_some() {
            write_flags(
                writer,
                self.extents
                    .cells()
                    .map(|[x, y, z]| self.get_node(x, y, z).is_none()),
            )?;
        }
        writer
            .flush()
            .map_err(|e| crate::io::error::stream_error("flushing grid stream", e))?;

        debug!(extents = %self.extents, free = self.free_count(), "saved grid");
        Ok(())
    }

    fn allocate(&mut self, extents: HalfExtents) {
        self.storage = Some(Array3::from_shape_fn(extents.shape(), |_| None));
        self.extents = extents;
        debug!(%extents, slots = extents.slot_count(), "allocated grid storage");
    }

    fn slot(&self, cell: [i32; 3]) -> Option<&Option<M>> {
        let index = self.extents.storage_index(cell)?;
        self.storage.as_ref()?.get(index)
    }

    fn slot_mut(&mut self, cell: [i32; 3]) -> Result<&mut Option<M>> {
        let out_of_bounds = GridError::CellOutOfBounds {
            cell,
            half_extents: self.extents,
            allocated: self.storage.is_some(),
        };
        match (self.extents.storage_index(cell), self.storage.as_mut()) {
            (Some(index), Some(storage)) => storage.get_mut(index).ok_or(out_of_bounds),
            _ => Err(out_of_bounds),
        }
    }
}

impl<M: CellMarker> SpatialGrid<M> {
    /// Build a grid by loading a persisted occupancy field
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::load`]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut grid = Self::new();
        grid.load(reader)?;
        Ok(grid)
    }

    /// Build a grid from an occupancy snapshot
    pub fn from_occupancy(occupancy: &Occupancy) -> Self {
        let mut grid = Self::new();
        grid.rebuild(occupancy);
        grid
    }

    /// Mark a cell traversable with a marker positioned at it, returning the marker it held
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfBounds`] if the coordinate is not a slot of this grid
    pub fn free_cell(&mut self, x: i32, y: i32, z: i32) -> Result<Option<M>> {
        self.set_node(x, y, z, Some(M::at_cell([x, y, z])))
    }

    /// Replace the grid contents with a persisted occupancy field
    ///
    /// The stream is parsed and validated in full before the grid is touched,
    /// so on error the previous contents remain intact. On success every prior
    /// marker is released before any new marker is created.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Io`] if the reader fails and
    /// [`GridError::MalformedInput`] if the stream is truncated or garbled
    pub fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        let occupancy = read_occupancy(reader)?;
        self.rebuild(&occupancy);
        Ok(())
    }

    /// Replace the grid contents with an occupancy snapshot
    ///
    /// Existing storage is destroyed first; a marker is then created at every
    /// free cell of the snapshot.
    pub fn rebuild(&mut self, occupancy: &Occupancy) {
        let released = self.destroy();
        self.allocate(occupancy.extents());

        if let Some(storage) = self.storage.as_mut() {
            for (cell, blocked) in occupancy.iter() {
                if blocked {
                    continue;
                }
                let Some(index) = self.extents.storage_index(cell) else {
                    continue;
                };
                if let Some(slot) = storage.get_mut(index) {
                    *slot = Some(M::at_cell(cell));
                }
            }
        }

        debug!(
            extents = %self.extents,
            released,
            free = occupancy.free_count(),
            "rebuilt grid from occupancy"
        );
    }
}

impl<M> Drop for SpatialGrid<M> {
    fn drop(&mut self) {
        self.destroy();
    }
}
