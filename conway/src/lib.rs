//! Conway's Game of Life on a toroidal grid.
//!
//! [`Simulation`] owns a [`GridStore`] and is the only thing that mutates it:
//! cell toggles, single steps, timer-driven runs and whole-grid replacement on
//! resize or restart. Every change is reported to a [`GridObserver`], so a
//! front end only ever renders what it is told.

pub mod config;
pub mod error;
pub mod grid;
pub mod lifecycle;
pub mod neighbors;
pub mod observer;
pub mod run_loop;
pub mod simulation;
pub mod transition;

pub use config::SimConfig;
pub use error::{Axis, GridError, Result};
pub use grid::{Cell, Counts, GridStore};
pub use lifecycle::{SizeBounds, compute_size_bounds, initial_dimensions, validate_resize};
pub use neighbors::count_alive_neighbors;
pub use observer::{GridObserver, Viewport};
pub use run_loop::{RunLoop, RunState, TickWaker};
pub use simulation::{ResizeOutcome, Simulation};
pub use transition::{CellChange, StepReport};
