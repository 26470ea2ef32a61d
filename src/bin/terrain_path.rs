use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use terrain_path::loader::load_grid;
use terrain_path::raster;
use terrain_path::render::RenderPlan;
use terrain_path::{PathEngineBuilder, SolveMode};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

#[derive(Parser)]
#[command(name = "terrain-path")]
#[command(about = "Find the cheapest west-to-east route across an elevation map and draw it")]
struct Cmd {
    /// Elevation data file (width and height headers, then row-major values)
    input: PathBuf,
    /// Image to write; the format follows the extension (e.g. map.png)
    output: PathBuf,
    /// Solver to use: `dp` or `recursive`
    #[arg(long, default_value = "dp")]
    mode: SolveMode,
    /// Widest grid the recursive solver accepts
    #[arg(long)]
    recursion_limit: Option<usize>,
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);

    let grid = load_grid(&cmd.input)
        .with_context(|| format!("error reading map data from \"{}\"", cmd.input.display()))?;
    tracing::info!(
        height = grid.height(),
        width = grid.width(),
        input = %cmd.input.display(),
        "loaded grid"
    );

    let mut builder = PathEngineBuilder::new(cmd.mode);
    if let Some(limit) = cmd.recursion_limit {
        anyhow::ensure!(limit > 0, "--recursion-limit must be positive");
        builder = builder.with_recursion_limit(limit);
    }
    let solution = builder.build().run(&grid)?;

    let plan = RenderPlan::from_solution(&grid, &solution);
    raster::save(&plan, &cmd.output)
        .with_context(|| format!("error saving image to \"{}\"", cmd.output.display()))?;

    println!("{}", solution.cost);
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
