// lifecycle.rs - Grid sizing, size bounds and randomisation

use rand::Rng;

use crate::config::{CELL_SCALE, CELL_SCALE_NARROW, NARROW_SCREEN_WIDTH};
use crate::error::{Axis, GridError, Result};
use crate::grid::{Cell, Counts, GridStore};

/// Largest grid that still keeps every cell at least `min_cell_px` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub max_rows: usize,
    pub max_cols: usize,
    pub min_cell_px: f32,
}

impl SizeBounds {
    pub fn max_for(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rows => self.max_rows,
            Axis::Cols => self.max_cols,
        }
    }
}

pub fn compute_size_bounds(viewport_width: f32, viewport_height: f32, min_cell_px: f32) -> SizeBounds {
    SizeBounds {
        max_rows: cells_that_fit(viewport_height, min_cell_px),
        max_cols: cells_that_fit(viewport_width, min_cell_px),
        min_cell_px,
    }
}

/// `floor(extent / cell)`, clamped to zero for degenerate inputs.
fn cells_that_fit(extent: f32, cell: f32) -> usize {
    if !(extent.is_finite() && cell.is_finite() && cell > 0.0 && extent > 0.0) {
        return 0;
    }
    (extent / cell).floor() as usize
}

/// Interpret the text of a rows/cols input field.
///
/// Surrounding whitespace is ignored and an empty field reads as zero;
/// anything that is not a number yields NaN, which validation then rejects.
pub fn parse_dimension(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn validate_axis(axis: Axis, value: f64, bounds: &SizeBounds) -> Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(GridError::InvalidDimensions { axis, value });
    }
    let max = bounds.max_for(axis);
    if value > max as f64 {
        return Err(GridError::SizeBoundExceeded {
            axis,
            requested: value as usize,
            max,
            min_cell_px: bounds.min_cell_px,
        });
    }
    Ok(value as usize)
}

/// Check a requested grid size. Rows are checked before cols; within an axis
/// an invalid number is reported before an exceeded bound.
pub fn validate_resize(new_rows: f64, new_cols: f64, bounds: &SizeBounds) -> Result<(usize, usize)> {
    let rows = validate_axis(Axis::Rows, new_rows, bounds)?;
    let cols = validate_axis(Axis::Cols, new_cols, bounds)?;
    Ok((rows, cols))
}

/// Usable Bernoulli probability: clamped into `[0, 1]`, NaN reads as 0.5.
pub fn alive_probability(p: f64) -> f64 {
    if p.is_nan() { 0.5 } else { p.clamp(0.0, 1.0) }
}

/// Set every cell alive independently with probability `p`.
pub fn randomize<R: Rng + ?Sized>(grid: &mut GridStore, rng: &mut R, p: f64) -> Counts {
    let p = alive_probability(p);
    grid.fill_with(|_, _| Cell::from(rng.gen_bool(p)));
    grid.counts()
}

/// Starting grid size for a drawing surface of `surface` pixels inside a
/// window of `window` pixels on a screen `screen_width` pixels wide.
///
/// Cells are sized relative to the larger window side; narrow screens get
/// cells twice as large.
pub fn initial_dimensions(surface: (f32, f32), window: (f32, f32), screen_width: f32) -> (usize, usize) {
    let scale = if screen_width < NARROW_SCREEN_WIDTH {
        CELL_SCALE_NARROW
    } else {
        CELL_SCALE
    };
    let cell = window.0.max(window.1) * scale;
    (cells_that_fit(surface.1, cell), cells_that_fit(surface.0, cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bounds() -> SizeBounds {
        compute_size_bounds(1280.0, 725.0, 10.0)
    }

    #[test]
    fn bounds_floor_viewport_over_cell_size() {
        let b = bounds();
        assert_eq!(b.max_rows, 72);
        assert_eq!(b.max_cols, 128);
        assert_eq!(compute_size_bounds(9.0, 9.0, 10.0).max_rows, 0);
        assert_eq!(compute_size_bounds(f32::NAN, 100.0, 10.0).max_cols, 0);
    }

    #[test]
    fn accepts_sizes_within_bounds() {
        let b = bounds();
        assert_eq!(validate_resize(10.0, 20.0, &b), Ok((10, 20)));
        assert_eq!(validate_resize(0.0, 0.0, &b), Ok((0, 0)));
        assert_eq!(validate_resize(72.0, 128.0, &b), Ok((72, 128)));
    }

    #[test]
    fn rejects_negative_nan_and_fractional() {
        let b = bounds();
        assert!(matches!(
            validate_resize(-1.0, 5.0, &b),
            Err(GridError::InvalidDimensions { axis: Axis::Rows, .. })
        ));
        assert!(matches!(
            validate_resize(f64::NAN, 5.0, &b),
            Err(GridError::InvalidDimensions { axis: Axis::Rows, .. })
        ));
        assert!(matches!(
            validate_resize(5.0, 2.5, &b),
            Err(GridError::InvalidDimensions { axis: Axis::Cols, .. })
        ));
        assert!(matches!(
            validate_resize(5.0, f64::INFINITY, &b),
            Err(GridError::InvalidDimensions { axis: Axis::Cols, .. })
        ));
    }

    #[test]
    fn rejects_sizes_past_bounds() {
        let b = bounds();
        assert_eq!(
            validate_resize((b.max_rows + 1) as f64, 5.0, &b),
            Err(GridError::SizeBoundExceeded {
                axis: Axis::Rows,
                requested: 73,
                max: 72,
                min_cell_px: 10.0,
            })
        );
        assert!(matches!(
            validate_resize(5.0, 129.0, &b),
            Err(GridError::SizeBoundExceeded { axis: Axis::Cols, .. })
        ));
    }

    #[test]
    fn parses_field_text() {
        assert_eq!(parse_dimension(" 12 "), 12.0);
        assert_eq!(parse_dimension(""), 0.0);
        assert_eq!(parse_dimension("007"), 7.0);
        assert_eq!(parse_dimension("-3"), -3.0);
        assert!(parse_dimension("ten").is_nan());
        assert!(parse_dimension("4x").is_nan());
    }

    #[test]
    fn randomize_covers_every_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = GridStore::new(17, 23).unwrap();
        let counts = randomize(&mut grid, &mut rng, 0.5);
        assert_eq!(counts.alive + counts.dead, 17 * 23);
        assert_eq!(counts, grid.counts());
        // 391 fair coin flips: far from all-or-nothing.
        assert!(counts.alive > 100 && counts.alive < 291, "alive = {}", counts.alive);
    }

    #[test]
    fn randomize_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = GridStore::new(4, 4).unwrap();
        assert_eq!(randomize(&mut grid, &mut rng, 1.0).alive, 16);
        assert_eq!(randomize(&mut grid, &mut rng, 0.0).alive, 0);
    }

    #[test]
    fn probability_is_sanitised() {
        assert_eq!(alive_probability(f64::NAN), 0.5);
        assert_eq!(alive_probability(1.7), 1.0);
        assert_eq!(alive_probability(-0.2), 0.0);
        assert_eq!(alive_probability(f64::INFINITY), 1.0);
        assert_eq!(alive_probability(0.25), 0.25);

        let mut grid = GridStore::new(3, 3).unwrap();
        let counts = randomize(&mut grid, &mut StdRng::seed_from_u64(5), f64::NAN);
        assert_eq!(counts.total(), 9);
    }

    #[test]
    fn randomize_is_reproducible_with_a_seed() {
        let mut a = GridStore::new(8, 8).unwrap();
        let mut b = GridStore::new(8, 8).unwrap();
        randomize(&mut a, &mut StdRng::seed_from_u64(42), 0.5);
        randomize(&mut b, &mut StdRng::seed_from_u64(42), 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn initial_size_uses_window_scale() {
        // 1000px window side * 0.03 = 30px cells.
        assert_eq!(initial_dimensions((900.0, 600.0), (1000.0, 800.0), 1920.0), (20, 30));
        // Narrow screen doubles the cell side to 60px.
        assert_eq!(initial_dimensions((900.0, 600.0), (1000.0, 800.0), 640.0), (10, 15));
    }
}
