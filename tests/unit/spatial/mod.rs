pub mod extent;
pub mod occupancy;
