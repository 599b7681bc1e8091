// neighbors.rs - Live-neighbor counting on a torus

use crate::grid::GridStore;

/// The eight `(dr, dc)` offsets around a cell.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Number of alive cells among the eight neighbours of `(row, col)`.
///
/// Edges wrap to the opposite side. On grids with fewer than three rows or
/// columns several offsets land on the same cell and each one is counted, so a
/// lone cell on a 1x1 grid has eight alive neighbours (itself).
///
/// `(row, col)` must lie inside a non-empty grid.
pub fn count_alive_neighbors(grid: &GridStore, row: usize, col: usize) -> u8 {
    debug_assert!(row < grid.rows() && col < grid.cols(), "({row}, {col}) outside grid");

    let rows = grid.rows();
    let cols = grid.cols();
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let nr = wrap(row, dr, rows);
        let nc = wrap(col, dc, cols);
        if grid.wrapped(nr, nc).is_alive() {
            count += 1;
        }
    }
    count
}

/// `(index + delta) mod len` for `delta` in `-1..=1`, without going negative.
fn wrap(index: usize, delta: isize, len: usize) -> usize {
    match delta {
        -1 => (index + len - 1) % len,
        0 => index,
        _ => (index + 1) % len,
    }
}
