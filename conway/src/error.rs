// error.rs - Error taxonomy for grid access and grid resizing

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

/// Which side of the grid a dimension refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Cols,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => f.write_str("rows"),
            Axis::Cols => f.write_str("cols"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Negative, fractional or non-numeric row/col count.
    #[error("We only accept nonnegative integers ;) ({axis} = {value})")]
    InvalidDimensions { axis: Axis, value: f64 },

    /// Requested count would shrink cells below the pixel floor.
    #[error("Cell side cannot be less than {min_cell_px} pixels ({axis} = {requested}, max {max})")]
    SizeBoundExceeded {
        axis: Axis,
        requested: usize,
        max: usize,
        min_cell_px: f32,
    },

    /// Internal: coordinate outside the current grid. Indicates a caller bug.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl GridError {
    /// True for errors caused by user input rather than an internal bug.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, GridError::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages_match_alert_text() {
        let invalid = GridError::InvalidDimensions { axis: Axis::Rows, value: -1.0 };
        assert!(invalid.to_string().starts_with("We only accept nonnegative integers"));
        assert!(invalid.is_user_facing());

        let bound = GridError::SizeBoundExceeded {
            axis: Axis::Cols,
            requested: 200,
            max: 120,
            min_cell_px: 10.0,
        };
        assert!(bound.to_string().starts_with("Cell side cannot be less than 10 pixels"));
        assert!(bound.is_user_facing());
    }

    #[test]
    fn out_of_range_is_internal() {
        let err = GridError::OutOfRange { row: 5, col: 0, rows: 3, cols: 3 };
        assert!(!err.is_user_facing());
        assert_eq!(err.to_string(), "cell (5, 0) is outside the 3x3 grid");
    }
}
