use proptest::prelude::*;
use terrain_path::path::reachability_fan;
use terrain_path::solvers::dp_solve;
use terrain_path::{reconstruct_path, Direction, ElevationGrid};

fn path_steps_ok(cells: &[(usize, usize)]) -> bool {
    cells.windows(2).all(|w| {
        let (a, b) = (w[0], w[1]);
        let dr = b.0 as isize - a.0 as isize;
        b.1 == a.1 + 1 && (-1..=1).contains(&dr)
    })
}

fn grid_strategy() -> impl Strategy<Value = ElevationGrid> {
    (1usize..12, 1usize..40).prop_flat_map(|(h, w)| {
        prop::collection::vec(-1000i32..1000, h * w)
            .prop_map(move |cells| ElevationGrid::from_row_major(h, w, cells).unwrap())
    })
}

proptest! {
    #[test]
    fn every_start_row_yields_a_valid_path(grid in grid_strategy()) {
        let table = dp_solve(&grid).table;
        for path in reachability_fan(&table) {
            prop_assert_eq!(path.len(), grid.width());
            prop_assert_eq!(path.cells().first().unwrap().1, 0);
            prop_assert_eq!(path.cells().last().unwrap().1, grid.width() - 1);
            prop_assert!(path_steps_ok(path.cells()));
            prop_assert!(path.iter().all(|&(r, _)| r < grid.height()));
            prop_assert!(path.is_valid_for(grid.height(), grid.width()));
        }
    }

    #[test]
    fn table_costs_follow_their_directions(grid in grid_strategy()) {
        let table = dp_solve(&grid).table;
        for row in 0..grid.height() {
            let path = reconstruct_path(&table, row);
            prop_assert_eq!(path.cost(&grid), table.cost(row, 0));
        }
    }

    #[test]
    fn solving_is_deterministic(grid in grid_strategy()) {
        let first = dp_solve(&grid);
        let second = dp_solve(&grid);
        let p1 = reconstruct_path(&first.table, first.start_row);
        let p2 = reconstruct_path(&second.table, second.start_row);
        prop_assert_eq!((first.cost, first.start_row), (second.cost, second.start_row));
        prop_assert_eq!(p1, p2);
        prop_assert_eq!(first.table, second.table);
    }

    #[test]
    fn flat_grids_cost_nothing(h in 1usize..10, w in 1usize..30, c in any::<i32>()) {
        let grid = ElevationGrid::from_row_major(h, w, vec![c; h * w]).unwrap();
        let sol = dp_solve(&grid);
        prop_assert_eq!(sol.cost, 0);
        prop_assert_eq!(sol.start_row, 0);
        for row in 0..h {
            prop_assert_eq!(sol.table.cost(row, 0), 0);
            for col in 0..w.saturating_sub(1) {
                prop_assert_eq!(sol.table.direction(row, col), Some(Direction::Stay));
            }
        }
    }

    #[test]
    fn single_row_grids_only_stay(w in 1usize..50, cells in prop::collection::vec(any::<i32>(), 50)) {
        let grid = ElevationGrid::from_row_major(1, w, cells[..w].to_vec()).unwrap();
        let sol = dp_solve(&grid);
        for col in 0..w - 1 {
            prop_assert_eq!(sol.table.direction(0, col), Some(Direction::Stay));
        }
        prop_assert_eq!(sol.table.direction(0, w - 1), None);
        let expected: u64 = cells[..w].windows(2).map(|p| u64::from(p[0].abs_diff(p[1]))).sum();
        prop_assert_eq!(sol.cost, expected);
    }
}
