// transition.rs - One generation of Conway's rule, computed then applied as a batch

use crate::grid::{Cell, Counts, GridStore};
use crate::neighbors::count_alive_neighbors;

/// A single cell flip produced by a step or a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub state: Cell,
}

/// What a step changed, so a view can update incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    pub changes: Vec<CellChange>,
    pub counts: Counts,
}

impl StepReport {
    pub fn is_stable(&self) -> bool {
        self.changes.is_empty()
    }
}

/// B3/S23.
pub fn next_state(current: Cell, alive_neighbors: u8) -> Cell {
    match (current, alive_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,                                    // Death or stays dead
    }
}

/// Read phase: every transition for the next generation, judged only against `grid`.
pub fn plan(grid: &GridStore) -> Vec<CellChange> {
    if grid.is_empty() {
        return Vec::new();
    }
    grid.iter()
        .filter_map(|(row, col, current)| {
            let state = next_state(current, count_alive_neighbors(grid, row, col));
            (state != current).then_some(CellChange { row, col, state })
        })
        .collect()
}

/// Write phase: apply a planned batch.
fn apply(grid: &mut GridStore, changes: &[CellChange]) {
    for change in changes {
        // Planned coordinates come from the same grid, so they are always in range.
        let applied = grid.set(change.row, change.col, change.state);
        debug_assert!(applied.is_ok(), "planned change outside grid: {change:?}");
    }
}

/// Advance `grid` by one generation in place.
pub fn step(grid: &mut GridStore) -> StepReport {
    let changes = plan(grid);
    apply(grid, &changes);
    log::debug!(
        "step: {} cells changed, {} alive",
        changes.len(),
        grid.counts().alive
    );
    StepReport {
        changes,
        counts: grid.counts(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> GridStore {
        let mut grid = GridStore::new(rows, cols).unwrap();
        for &(r, c) in alive {
            grid.set(r, c, Cell::Alive).unwrap();
        }
        grid
    }

    fn alive_set(grid: &GridStore) -> Vec<(usize, usize)> {
        grid.alive_cells().collect()
    }

    #[test]
    fn rule_table() {
        for n in 0..=8u8 {
            let survives = n == 2 || n == 3;
            assert_eq!(next_state(Cell::Alive, n).is_alive(), survives, "alive with {n}");
            assert_eq!(next_state(Cell::Dead, n).is_alive(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn dead_grid_stays_dead() {
        for (rows, cols) in [(1, 1), (2, 3), (8, 8), (5, 13)] {
            let mut grid = GridStore::new(rows, cols).unwrap();
            let report = step(&mut grid);
            assert!(report.is_stable());
            assert_eq!(report.counts.alive, 0);
            assert_eq!(report.counts.dead, rows * cols);
        }
    }

    #[test]
    fn empty_grid_is_a_no_op() {
        let mut grid = GridStore::new(0, 4).unwrap();
        let report = step(&mut grid);
        assert_eq!(report, StepReport::default());
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        for size in [4, 6] {
            let mut grid = grid_with(size, size, &block);
            for _ in 0..10 {
                let report = step(&mut grid);
                assert!(report.is_stable());
                assert_eq!(report.counts.alive, 4);
            }
            assert_eq!(alive_set(&grid), block.to_vec());
        }
    }

    #[test]
    fn block_across_the_wrap_is_still_life() {
        let mut grid = grid_with(5, 5, &[(0, 0), (0, 4), (4, 0), (4, 4)]);
        let before = grid.clone();
        step(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = [(2, 1), (2, 2), (2, 3)];
        let mut grid = grid_with(5, 5, &horizontal);

        let first = step(&mut grid);
        assert_eq!(alive_set(&grid), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(first.changes.len(), 4);
        assert_eq!(first.counts.alive, 3);

        step(&mut grid);
        assert_eq!(alive_set(&grid), horizontal.to_vec());
    }

    #[test]
    fn report_lists_exactly_the_flipped_cells() {
        let mut grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let report = step(&mut grid);
        let mut changes = report.changes.clone();
        changes.sort_by_key(|c| (c.row, c.col));
        assert_eq!(
            changes,
            vec![
                CellChange { row: 1, col: 2, state: Cell::Alive },
                CellChange { row: 2, col: 1, state: Cell::Dead },
                CellChange { row: 2, col: 3, state: Cell::Dead },
                CellChange { row: 3, col: 2, state: Cell::Alive },
            ]
        );
    }

    #[test]
    fn transitions_do_not_see_each_other() {
        // Row-by-row in-place mutation would let (2,2) die before (1,2)/(3,2)
        // are judged and break the blinker.
        let mut grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let planned = plan(&grid);
        assert_eq!(grid.counts().alive, 3, "plan must not mutate");
        step(&mut grid);
        assert_eq!(planned.len(), 4);
        assert_eq!(grid.counts().alive, 3);
    }

    #[test]
    fn glider_wraps_around_the_torus() {
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let mut grid = grid_with(8, 8, &glider);
        // A glider moves one cell diagonally every four generations; on an 8x8
        // torus it returns home after 32.
        for _ in 0..32 {
            step(&mut grid);
            assert_eq!(grid.counts().alive, 5);
        }
        assert_eq!(alive_set(&grid), glider.to_vec());
    }

    #[test]
    fn lone_cell_on_tiny_torus() {
        // Counted eight times over itself: overpopulated.
        let mut grid = grid_with(1, 1, &[(0, 0)]);
        let report = step(&mut grid);
        assert_eq!(report.counts, Counts { alive: 0, dead: 1 });
    }
}
