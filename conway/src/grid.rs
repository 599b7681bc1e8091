// grid.rs - Grid types for Conway's Game of Life

use crate::error::{Axis, GridError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn flipped(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Alive/dead tally of a whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub alive: usize,
    pub dead: usize,
}

impl Counts {
    pub fn total(&self) -> usize {
        self.alive + self.dead
    }
}

/// Row-major storage of `rows * cols` cells.
///
/// The alive tally is maintained on every write so `counts()` never rescans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStore {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    alive: usize,
}

impl GridStore {
    /// An all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::with_fill(rows, cols, |_, _| Cell::Dead)
    }

    /// Build a grid asking `fill` for the state of every cell in row-major order.
    pub fn with_fill(rows: usize, cols: usize, mut fill: impl FnMut(usize, usize) -> Cell) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(fill(row, col));
            }
        }
        let alive = cells.iter().filter(|c| c.is_alive()).count();
        Ok(Self { rows, cols, cells, alive })
    }

    /// Construct from rows of booleans (`true` = alive). All rows must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != cols) {
            return Err(GridError::InvalidDimensions {
                axis: Axis::Cols,
                value: bad.as_ref().len() as f64,
            });
        }
        Self::with_fill(rows.len(), cols, |r, c| Cell::from(rows[r].as_ref()[c]))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrite one cell, returning its previous state.
    pub fn set(&mut self, row: usize, col: usize, state: Cell) -> Result<Cell> {
        let i = self.index(row, col)?;
        let old = std::mem::replace(&mut self.cells[i], state);
        match (old, state) {
            (Cell::Dead, Cell::Alive) => self.alive += 1,
            (Cell::Alive, Cell::Dead) => self.alive -= 1,
            _ => {}
        }
        Ok(old)
    }

    /// Lookup with toroidal wraparound. Grid must be non-empty.
    pub(crate) fn wrapped(&self, row: usize, col: usize) -> Cell {
        self.cells[(row % self.rows) * self.cols + col % self.cols]
    }

    /// Replace the whole grid with a fresh `rows x cols` one.
    ///
    /// The new cells are built before the old ones are dropped, so on error
    /// the grid is left exactly as it was.
    pub fn resize(&mut self, rows: usize, cols: usize, fill: impl FnMut(usize, usize) -> Cell) -> Result<()> {
        *self = Self::with_fill(rows, cols, fill)?;
        Ok(())
    }

    /// Rewrite every cell in place, keeping the dimensions.
    pub fn fill_with(&mut self, mut fill: impl FnMut(usize, usize) -> Cell) {
        let cols = self.cols;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = fill(i / cols, i % cols);
        }
        self.alive = self.cells.iter().filter(|c| c.is_alive()).count();
    }

    pub fn counts(&self) -> Counts {
        Counts {
            alive: self.alive,
            dead: self.cells.len() - self.alive,
        }
    }

    /// `(row, col, state)` for every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / cols, i % cols, cell))
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().filter(|(_, _, c)| c.is_alive()).map(|(r, c, _)| (r, c))
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

/// Cell count for `rows x cols`, or an error naming the larger side when the
/// product does not fit in memory.
fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<Cell>().max(1))
        .ok_or_else(|| {
            let (axis, value) = if rows >= cols {
                (Axis::Rows, rows)
            } else {
                (Axis::Cols, cols)
            };
            GridError::InvalidDimensions { axis, value: value as f64 }
        })
}
