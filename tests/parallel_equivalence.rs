#![cfg(feature = "parallel")]

use proptest::prelude::*;
use terrain_path::solvers::{dp_solve, recursive_min_cost, RecursiveSolver};
use terrain_path::{reconstruct_path, ElevationGrid, PathSolver};

/// Serial reference: the straightforward nested-loop DP.
fn serial_table(grid: &ElevationGrid) -> Vec<Vec<u64>> {
    let (h, w) = (grid.height(), grid.width());
    let mut cost = vec![vec![0u64; w]; h];
    for col in (0..w.saturating_sub(1)).rev() {
        for row in 0..h {
            let here = grid.elevation(row, col);
            let mut best = u64::MAX;
            for next in row.saturating_sub(1)..=(row + 1).min(h - 1) {
                let cand = u64::from(here.abs_diff(grid.elevation(next, col + 1))) + cost[next][col + 1];
                best = best.min(cand);
            }
            cost[row][col] = best;
        }
    }
    cost
}

proptest! {
    #[test]
    fn parallel_dp_matches_serial(
        h in 1usize..24,
        w in 1usize..24,
        cells in prop::collection::vec(-50i32..50, 24 * 24)
    ) {
        let grid = ElevationGrid::from_row_major(h, w, cells[..h * w].to_vec()).unwrap();
        let sol = dp_solve(&grid);
        let baseline = serial_table(&grid);
        for (row, costs) in baseline.iter().enumerate() {
            for (col, &c) in costs.iter().enumerate() {
                prop_assert_eq!(sol.table.cost(row, col), c);
            }
        }
        let path = reconstruct_path(&sol.table, sol.start_row);
        prop_assert_eq!(path.cost(&grid), sol.cost);
    }

    #[test]
    fn parallel_recursive_rows_keep_order(
        h in 1usize..6,
        w in 1usize..7,
        cells in prop::collection::vec(-9i32..9, 36)
    ) {
        let grid = ElevationGrid::from_row_major(h, w, cells[..h * w].to_vec()).unwrap();
        let serial: Vec<u64> = (0..h).map(|row| recursive_min_cost(&grid, row)).collect();
        prop_assert_eq!(RecursiveSolver.costs_by_start_row(&grid), serial);
    }
}
