//! Saving and loading grids on the file system

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::io::error::{GridError, Result};
use crate::spatial::grid::SpatialGrid;
use crate::spatial::node::CellMarker;

/// Write a grid to `path`, creating parent directories as needed
///
/// # Errors
///
/// Returns [`GridError::FileSystem`] if the directory or file cannot be
/// created or written
pub fn save_grid<M>(grid: &SpatialGrid<M>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "create",
        source,
    })?;

    let mut writer = BufWriter::new(file);
    grid.save(&mut writer)
        .map_err(|error| with_path(error, path, "write"))
}

/// Load a grid from `path`
///
/// # Errors
///
/// Returns [`GridError::FileSystem`] if the file cannot be opened or read, and
/// [`GridError::MalformedInput`] if its contents are not a valid grid
pub fn load_grid<M: CellMarker>(path: &Path) -> Result<SpatialGrid<M>> {
    let file = File::open(path).map_err(|source| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "open",
        source,
    })?;

    SpatialGrid::from_reader(BufReader::new(file))
        .map_err(|error| with_path(error, path, "read"))
}

/// Reload an existing grid in place from `path`
///
/// The grid keeps its previous contents if the file is missing or malformed.
///
/// # Errors
///
/// Same conditions as [`load_grid`]
pub fn reload_grid<M: CellMarker>(grid: &mut SpatialGrid<M>, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|source| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "open",
        source,
    })?;

    grid.load(BufReader::new(file))
        .map_err(|error| with_path(error, path, "read"))
}

// Stream errors gain the path; parse errors already carry their own context
fn with_path(error: GridError, path: &Path, operation: &'static str) -> GridError {
    match error {
        GridError::Io { source, .. } => GridError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        },
        other => other,
    }
}
