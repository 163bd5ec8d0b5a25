//! Seeded random occupancy generation for test maps and benchmarks

use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::configuration::PROGRESS_UPDATE_INTERVAL;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::extent::HalfExtents;
use crate::spatial::occupancy::Occupancy;

/// Generate an occupancy field where each cell is free with probability `density`
///
/// Cells are drawn in persisted traversal order from a `StdRng` seeded with
/// `seed`, so the same inputs always produce the same map.
///
/// # Errors
///
/// Returns [`crate::GridError::InvalidParameter`] if `density` is not within `[0, 1]`
pub fn random_occupancy(extents: HalfExtents, density: f64, seed: u64) -> Result<Occupancy> {
    random_occupancy_with_progress(extents, density, seed, |_| {})
}

/// Generate a random occupancy field, reporting progress while drawing cells
///
/// `on_progress` receives the number of cells drawn so far every
/// [`PROGRESS_UPDATE_INTERVAL`] cells and once more at the end.
///
/// # Errors
///
/// Returns [`crate::GridError::InvalidParameter`] if `density` is not within `[0, 1]`
pub fn random_occupancy_with_progress<F>(
    extents: HalfExtents,
    density: f64,
    seed: u64,
    mut on_progress: F,
) -> Result<Occupancy>
where
    F: FnMut(u64),
{
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be a probability between 0 and 1",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut blocked = BitVec::with_capacity(extents.slot_count());
    let mut drawn = 0_u64;

    for _ in extents.cells() {
        blocked.push(!rng.random_bool(density));
        drawn += 1;
        if drawn % PROGRESS_UPDATE_INTERVAL == 0 {
            on_progress(drawn);
        }
    }
    on_progress(drawn);

    Occupancy::from_flags(extents, blocked)
}
