// view.rs - Display-side copy of the grid, fed only by simulation events

use conway::{Cell, Counts, GridObserver};

/// What the painter draws from. Never read back into the simulation.
#[derive(Debug, Default)]
pub struct CellView {
    rows: usize,
    cols: usize,
    alive: Vec<bool>,
    counts: Counts,
}

impl CellView {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.alive[row * self.cols + col]
    }
}

impl GridObserver for CellView {
    fn grid_replaced(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.alive = vec![false; rows * cols];
        self.counts = Counts { alive: 0, dead: rows * cols };
    }

    fn cell_changed(&mut self, row: usize, col: usize, state: Cell) {
        if row < self.rows && col < self.cols {
            self.alive[row * self.cols + col] = state.is_alive();
        } else {
            log::error!("view got change for ({row}, {col}) outside {}x{}", self.rows, self.cols);
        }
    }

    fn counts_changed(&mut self, counts: Counts) {
        self.counts = counts;
    }
}
