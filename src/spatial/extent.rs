//! Half-extents of an origin-centred grid and the coordinate/slot mapping
//!
//! A grid with half-extents `(hw, hh, hd)` accepts coordinates in
//! `[-hw, hw] x [-hh, hh] x [-hd, hd]`. Storage is laid out with Y varying
//! slowest, then X, then Z fastest:
//!
//! ```text
//! index(x, y, z) = (y + hh)(2hw + 1)(2hd + 1) + (x + hw)(2hd + 1) + (z + hd)
//! ```
//!
//! Persistence walks cells in a different order (X outer, Y middle, Z inner);
//! [`HalfExtents::cells`] yields that traversal.

use std::fmt;

use crate::io::configuration::MAX_HALF_EXTENT;
use crate::io::error::{GridError, Result};

/// Maximum coordinate magnitude along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HalfExtents {
    half_width: u32,
    half_height: u32,
    half_depth: u32,
}

impl HalfExtents {
    /// Extents of an empty, unallocated grid
    pub const ZERO: Self = Self {
        half_width: 0,
        half_height: 0,
        half_depth: 0,
    };

    /// Validate and create half-extents
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidExtent`] if any half-extent exceeds
    /// [`MAX_HALF_EXTENT`] or the resulting slot count overflows `usize`
    pub fn new(half_width: u32, half_height: u32, half_depth: u32) -> Result<Self> {
        for (parameter, value) in [
            ("half_width", half_width),
            ("half_height", half_height),
            ("half_depth", half_depth),
        ] {
            if value > MAX_HALF_EXTENT {
                return Err(GridError::InvalidExtent {
                    parameter,
                    value: i64::from(value),
                    reason: format!("must not exceed {MAX_HALF_EXTENT}"),
                });
            }
        }

        let extents = Self {
            half_width,
            half_height,
            half_depth,
        };

        if extents.checked_slot_count().is_none() {
            return Err(GridError::InvalidExtent {
                parameter: "slot_count",
                value: i64::from(half_width.max(half_height).max(half_depth)),
                reason: "grid volume does not fit in memory addressing".to_string(),
            });
        }

        Ok(extents)
    }

    /// Half-extent along X
    pub const fn half_width(&self) -> u32 {
        self.half_width
    }

    /// Half-extent along Y
    pub const fn half_height(&self) -> u32 {
        self.half_height
    }

    /// Half-extent along Z
    pub const fn half_depth(&self) -> u32 {
        self.half_depth
    }

    /// Full span along X (`2 * half_width`)
    pub const fn width(&self) -> u32 {
        self.half_width * 2
    }

    /// Full span along Y (`2 * half_height`)
    pub const fn height(&self) -> u32 {
        self.half_height * 2
    }

    /// Full span along Z (`2 * half_depth`)
    pub const fn depth(&self) -> u32 {
        self.half_depth * 2
    }

    /// Storage shape as `(y, x, z)` slot counts, slowest axis first
    pub const fn shape(&self) -> (usize, usize, usize) {
        (
            self.height() as usize + 1,
            self.width() as usize + 1,
            self.depth() as usize + 1,
        )
    }

    fn checked_slot_count(&self) -> Option<usize> {
        let (rows, cols, layers) = self.shape();
        rows.checked_mul(cols)?.checked_mul(layers)
    }

    /// Number of valid coordinates, one storage slot each
    pub const fn slot_count(&self) -> usize {
        let (rows, cols, layers) = self.shape();
        rows * cols * layers
    }

    /// Check whether a coordinate lies within `[-half, half]` on every axis
    pub const fn contains(&self, cell: [i32; 3]) -> bool {
        let [x, y, z] = cell;
        let (hw, hh, hd) = self.signed();
        x >= -hw && x <= hw && y >= -hh && y <= hh && z >= -hd && z <= hd
    }

    /// Multi-dimensional storage index `[y, x, z]` for a coordinate
    ///
    /// Returns `None` when the coordinate is outside the extents.
    pub const fn storage_index(&self, cell: [i32; 3]) -> Option<[usize; 3]> {
        if !self.contains(cell) {
            return None;
        }
        let [x, y, z] = cell;
        let (hw, hh, hd) = self.signed();
        Some([(y + hh) as usize, (x + hw) as usize, (z + hd) as usize])
    }

    /// Linear slot index for a coordinate, Y slowest and Z fastest
    ///
    /// Returns `None` when the coordinate is outside the extents.
    pub const fn linear_index(&self, cell: [i32; 3]) -> Option<usize> {
        let Some([row, col, layer]) = self.storage_index(cell) else {
            return None;
        };
        let (_, cols, layers) = self.shape();
        Some(row * cols * layers + col * layers + layer)
    }

    /// Position of a coordinate within the persisted traversal order of [`Self::cells`]
    pub const fn traversal_index(&self, cell: [i32; 3]) -> Option<usize> {
        let Some([row, col, layer]) = self.storage_index(cell) else {
            return None;
        };
        let (rows, _, layers) = self.shape();
        Some(col * rows * layers + row * layers + layer)
    }

    /// Coordinate stored at a linear slot index, inverse of [`Self::linear_index`]
    pub const fn coordinate_at(&self, index: usize) -> Option<[i32; 3]> {
        if index >= self.slot_count() {
            return None;
        }
        let (_, cols, layers) = self.shape();
        let row = index / (cols * layers);
        let col = (index / layers) % cols;
        let layer = index % layers;
        Some(self.coordinate_from_storage([row, col, layer]))
    }

    /// Coordinate for a `[y, x, z]` storage index
    pub const fn coordinate_from_storage(&self, index: [usize; 3]) -> [i32; 3] {
        let [row, col, layer] = index;
        let (hw, hh, hd) = self.signed();
        [col as i32 - hw, row as i32 - hh, layer as i32 - hd]
    }

    /// Every valid coordinate in persisted traversal order: X outer, Y middle, Z inner
    pub fn cells(&self) -> impl Iterator<Item = [i32; 3]> + use<> {
        let (hw, hh, hd) = self.signed();
        (-hw..=hw).flat_map(move |x| {
            (-hh..=hh).flat_map(move |y| (-hd..=hd).map(move |z| [x, y, z]))
        })
    }

    // Half-extents are bounded by MAX_HALF_EXTENT, so the casts cannot wrap
    const fn signed(&self) -> (i32, i32, i32) {
        (
            self.half_width as i32,
            self.half_height as i32,
            self.half_depth as i32,
        )
    }
}

impl fmt::Display for HalfExtents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "±{}x±{}x±{}",
            self.half_width, self.half_height, self.half_depth
        )
    }
}
