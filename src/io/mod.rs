//! Persistence, diagnostics and the command-line front end

/// Command-line argument parsing and command execution
pub mod cli;
/// Limits and default values
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Text codec for persisted occupancy fields
pub mod format;
/// File system save and load helpers
pub mod persistence;
/// Progress display for long-running operations
pub mod progress;
