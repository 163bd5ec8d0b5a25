//! Nearest-cell snapping for continuous coordinates
//!
//! Continuous query points are mapped to integer cells by rounding half up,
//! `floor(v + 0.5)`, independently per axis. Ties therefore always move toward
//! positive infinity: `0.5 -> 1` and `-0.5 -> 0`.

use num_traits::Float;

/// Round a single coordinate half up to the nearest integer cell index
///
/// Returns `None` for NaN, infinities and values outside the `i32` range,
/// none of which can address a cell.
pub fn snap_to_cell<T: Float>(value: T) -> Option<i32> {
    let half = T::from(0.5)?;
    (value + half).floor().to_i32()
}

/// Snap a 3-component continuous position to its nearest integer cell
pub fn snap_position<T: Float>(position: [T; 3]) -> Option<[i32; 3]> {
    let [x, y, z] = position;
    Some([snap_to_cell(x)?, snap_to_cell(y)?, snap_to_cell(z)?])
}
