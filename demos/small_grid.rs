//! Example: solve a tiny grid with both solvers.
//!
//! Run with:
//! `cargo run --example small_grid`

use terrain_path::{solve, ElevationGrid, SolveMode};

fn main() -> terrain_path::Result<()> {
    let grid = ElevationGrid::from_rows(vec![
        vec![3, 4, 1, 2, 8, 6],
        vec![6, 1, 8, 2, 7, 4],
        vec![5, 9, 3, 9, 9, 5],
        vec![8, 4, 1, 3, 2, 6],
        vec![3, 7, 2, 8, 6, 4],
    ])?;

    let dp = solve(&grid, SolveMode::DynamicProgramming)?;
    let rec = solve(&grid, SolveMode::Recursive)?;

    println!("DP optimum:        {} (start row {})", dp.cost, dp.start_row);
    println!("Recursive optimum: {} (start row {})", rec.cost, rec.start_row);

    if let Some(path) = &dp.path {
        println!("Path:");
        for &(row, col) in path {
            println!("  col = {col}, row = {row}, elevation = {}", grid.elevation(row, col));
        }
    }
    Ok(())
}
