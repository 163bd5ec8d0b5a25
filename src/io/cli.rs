//! Command-line interface for generating and inspecting persisted grids

use crate::io::configuration::{
    DEFAULT_DENSITY, DEFAULT_HALF_EXTENT, DEFAULT_SEED, OUTPUT_EXTENSION,
};
use crate::io::error::Result;
use crate::io::persistence::{load_grid, save_grid};
use crate::io::progress::CellProgress;
use crate::math::rounding::snap_position;
use crate::math::vector::Vector4;
use crate::spatial::extent::HalfExtents;
use crate::spatial::grid::SpatialGrid;
use crate::spatial::node::Node;
use crate::spatial::populate::random_occupancy_with_progress;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "occugrid")]
#[command(
    author,
    version,
    about = "Generate and inspect origin-centred 3D occupancy grids"
)]
/// Command-line arguments for the grid tool
pub struct Cli {
    /// Emit debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Supported operations
#[derive(Subcommand)]
pub enum Command {
    /// Write a randomly populated grid
    Generate(GenerateArgs),

    /// Print extents and free/blocked counts of a grid file
    Info {
        /// Grid file to inspect
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Report whether the cell nearest to a point is free
    Query {
        /// Grid file to query
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// X coordinate of the query point
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Y coordinate of the query point
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Z coordinate of the query point
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
}

/// Arguments for `generate`
#[derive(Args)]
pub struct GenerateArgs {
    /// Destination grid file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Half-extent along X
    #[arg(short = 'x', long, default_value_t = DEFAULT_HALF_EXTENT)]
    pub half_width: u32,

    /// Half-extent along Y
    #[arg(short = 'y', long, default_value_t = DEFAULT_HALF_EXTENT)]
    pub half_height: u32,

    /// Half-extent along Z
    #[arg(short = 'z', long, default_value_t = DEFAULT_HALF_EXTENT)]
    pub half_depth: u32,

    /// Probability that a cell is free
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Overwrite the output if it already exists
    #[arg(short, long)]
    pub force: bool,
}

impl GenerateArgs {
    /// Output path, with the grid extension added when none is given
    pub fn output_path(&self) -> PathBuf {
        if self.output.extension().is_some() {
            self.output.clone()
        } else {
            self.output.with_extension(OUTPUT_EXTENSION)
        }
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter when `RUST_LOG` is unset
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Install the stderr tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this more than
/// once keeps the first subscriber.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Executes a parsed command and renders its report
pub struct GridTool {
    cli: Cli,
}

impl GridTool {
    /// Create a tool for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the command, returning the text to show the user
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, the output already exists
    /// without `--force`, or a grid file cannot be read or written
    pub fn run(&self) -> Result<String> {
        match &self.cli.command {
            Command::Generate(args) => self.generate(args),
            Command::Info { input } => Self::info(input),
            Command::Query { input, x, y, z } => Self::query(input, Vector4::point(*x, *y, *z)),
        }
    }

    fn generate(&self, args: &GenerateArgs) -> Result<String> {
        let output = args.output_path();
        if output.exists() && !args.force {
            return Err(crate::io::error::invalid_parameter(
                "output",
                &output.display(),
                &"file exists; pass --force to overwrite",
            ));
        }

        let extents = HalfExtents::new(args.half_width, args.half_height, args.half_depth)?;
        let progress = if self.cli.should_show_progress() {
            CellProgress::new(extents.slot_count(), "generating")
        } else {
            CellProgress::hidden()
        };

        let occupancy = random_occupancy_with_progress(extents, args.density, args.seed, |n| {
            progress.set_position(n);
        })?;
        progress.finish();

        let grid = SpatialGrid::<Node>::from_occupancy(&occupancy);
        save_grid(&grid, &output)?;
        info!(path = %output.display(), %extents, "generated grid");

        Ok(format!(
            "wrote {}: {extents}, {} free of {} cells",
            output.display(),
            grid.free_count(),
            grid.slot_count()
        ))
    }

    fn info(input: &Path) -> Result<String> {
        let grid = load_grid::<Node>(input)?;
        let extents = grid.half_extents();
        let (rows, cols, layers) = extents.shape();
        let free = grid.free_count();
        let slots = grid.slot_count();

        Ok(format!(
            "half-extents: {} {} {}\ndimensions: {cols}x{rows}x{layers}\ncells: {slots}\nfree: {free}\nblocked: {}",
            extents.half_width(),
            extents.half_height(),
            extents.half_depth(),
            slots - free
        ))
    }

    fn query(input: &Path, point: Vector4) -> Result<String> {
        let grid = load_grid::<Node>(input)?;

        let Some([x, y, z]) = snap_position(point.xyz()) else {
            return Ok("outside".to_string());
        };
        if !grid.contains(x, y, z) {
            return Ok("outside".to_string());
        }

        let state = if grid.get_node_at(&point).is_some() {
            "free"
        } else {
            "blocked"
        };
        Ok(format!("{state} ({x}, {y}, {z})"))
    }
}
