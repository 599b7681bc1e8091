// observer.rs - Boundary between the simulation core and whatever draws it

use crate::grid::{Cell, Counts};

/// Receives every state change the simulation makes.
///
/// A full grid replacement arrives as `grid_replaced`, then one `cell_changed`
/// per alive cell of the new grid (replaced grids start out dead from the
/// observer's point of view), then `counts_changed`.
pub trait GridObserver {
    fn grid_replaced(&mut self, _rows: usize, _cols: usize) {}
    fn cell_changed(&mut self, _row: usize, _col: usize, _state: Cell) {}
    fn counts_changed(&mut self, _counts: Counts) {}
}

/// Discards all events.
impl GridObserver for () {}

/// Source of the drawing surface size, pulled whenever size bounds are refreshed.
pub trait Viewport {
    /// `(width, height)` in pixels.
    fn viewport_size(&self) -> (f32, f32);
}

impl Viewport for (f32, f32) {
    fn viewport_size(&self) -> (f32, f32) {
        *self
    }
}
