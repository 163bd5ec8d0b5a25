//! Mathematical utilities for continuous positions

/// Nearest-cell snapping of continuous coordinates
pub mod rounding;
/// Homogeneous 4-component position vector
pub mod vector;
