use proptest::prelude::*;
use terrain_path::solvers::{dp_solve, recursive_min_cost, DpSolver, RecursiveSolver};
use terrain_path::{solve, ElevationGrid, PathSolver, SolveMode};

fn grid_strategy(max_h: usize, max_w: usize, span: i32) -> impl Strategy<Value = ElevationGrid> {
    (1..=max_h, 1..=max_w).prop_flat_map(move |(h, w)| {
        prop::collection::vec(-span..=span, h * w)
            .prop_map(move |cells| ElevationGrid::from_row_major(h, w, cells).unwrap())
    })
}

proptest! {
    #[test]
    fn dp_optimum_matches_recursive_minimum(grid in grid_strategy(5, 8, 20)) {
        let recursive_best = (0..grid.height())
            .map(|row| recursive_min_cost(&grid, row))
            .min()
            .unwrap();
        prop_assert_eq!(dp_solve(&grid).cost, recursive_best);
    }

    #[test]
    fn per_row_costs_agree(grid in grid_strategy(4, 7, 5)) {
        prop_assert_eq!(
            DpSolver.costs_by_start_row(&grid),
            RecursiveSolver.costs_by_start_row(&grid)
        );
    }

    #[test]
    fn engine_modes_agree_on_start_row(grid in grid_strategy(4, 6, 3)) {
        let dp = solve(&grid, SolveMode::DynamicProgramming).unwrap();
        let rec = solve(&grid, SolveMode::Recursive).unwrap();
        prop_assert_eq!(dp.cost, rec.cost);
        prop_assert_eq!(dp.start_row, rec.start_row);
    }

    #[test]
    fn reconstructed_path_realises_the_optimum(grid in grid_strategy(5, 8, 10)) {
        let solution = solve(&grid, SolveMode::DynamicProgramming).unwrap();
        let path = solution.path.unwrap();
        prop_assert_eq!(path.cost(&grid), solution.cost);
        prop_assert_eq!(
            recursive_min_cost(&grid, path.start_row().unwrap()),
            solution.cost
        );
    }
}
