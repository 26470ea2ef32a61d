//! Example: load an elevation file, solve it and write a PNG.
//!
//! Run with:
//! `cargo run --example render_map -- demos/data/hills.dat hills.png`

use std::env;

use terrain_path::loader::load_grid;
use terrain_path::raster;
use terrain_path::render::RenderPlan;
use terrain_path::{solve, SolveMode};

fn main() -> terrain_path::Result<()> {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "demos/data/hills.dat".to_string());
    let output = args.next().unwrap_or_else(|| "hills.png".to_string());

    let grid = load_grid(&input)?;
    let solution = solve(&grid, SolveMode::DynamicProgramming)?;
    raster::save(&RenderPlan::from_solution(&grid, &solution), &output)?;

    println!("{}x{} grid from {input}", grid.height(), grid.width());
    println!("optimal cost {} starting at row {}", solution.cost, solution.start_row);
    println!("wrote {output}");
    Ok(())
}
