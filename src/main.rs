//! CLI entry point for generating and inspecting occupancy grids

use clap::Parser;
use occugrid::io::cli::{Cli, GridTool, init_tracing};

// Allow print for the command's report, the tool's only stdout output
#[allow(clippy::print_stdout)]
fn main() -> occugrid::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let report = GridTool::new(cli).run()?;
    println!("{report}");
    Ok(())
}
