//! Homogeneous position vector shared by markers and continuous grid queries

use std::fmt;

/// Homogeneous 4-component vector
///
/// Only the first three components take part in grid addressing. The fourth
/// is carried along untouched and is `1.0` for points built from cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector4 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
    /// Homogeneous component
    pub w: f64,
}

impl Vector4 {
    /// Create a vector from all four components
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (`w = 1`) from three components
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create the point located exactly at an integer cell
    pub fn from_cell(cell: [i32; 3]) -> Self {
        let [x, y, z] = cell;
        Self::point(f64::from(x), f64::from(y), f64::from(z))
    }

    /// The spatial components, dropping `w`
    pub const fn xyz(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for Vector4 {
    fn default() -> Self {
        Self::point(0.0, 0.0, 0.0)
    }
}

impl From<[f64; 3]> for Vector4 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::point(x, y, z)
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
