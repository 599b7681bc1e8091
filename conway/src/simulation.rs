// simulation.rs - Owns the grid and drives it from user input and timer ticks

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::runtime::Handle;

use crate::config::SimConfig;
use crate::error::{Axis, Result};
use crate::grid::{Cell, Counts, GridStore};
use crate::lifecycle::{self, SizeBounds};
use crate::observer::{GridObserver, Viewport};
use crate::run_loop::{RunLoop, TickWaker};
use crate::transition::{self, StepReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Requested size equals the current one; nothing happened.
    Unchanged,
    Replaced { rows: usize, cols: usize },
}

/// The single owner of a grid. Every mutation goes through here and is
/// reported to the observer.
pub struct Simulation<O: GridObserver> {
    config: SimConfig,
    grid: GridStore,
    bounds: SizeBounds,
    run_loop: RunLoop,
    rng: StdRng,
    generation: u64,
    observer: O,
}

impl<O: GridObserver> Simulation<O> {
    /// A randomly filled `rows x cols` grid bounded by the current viewport.
    pub fn new(
        config: SimConfig,
        viewport: &impl Viewport,
        rows: usize,
        cols: usize,
        runtime: Handle,
        observer: O,
    ) -> Result<Self> {
        let (width, height) = viewport.viewport_size();
        let bounds = lifecycle::compute_size_bounds(width, height, config.min_cell_px);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut grid = GridStore::new(rows, cols)?;
        lifecycle::randomize(&mut grid, &mut rng, config.alive_probability);
        let run_loop = RunLoop::new(runtime, config.step_interval);

        let mut sim = Self {
            config,
            grid,
            bounds,
            run_loop,
            rng,
            generation: 0,
            observer,
        };
        sim.announce_grid();
        Ok(sim)
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn counts(&self) -> Counts {
        self.grid.counts()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Flip one cell.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let current = self.grid.get(row, col).inspect_err(|err| {
            log::error!("toggle rejected: {err}");
        })?;
        let state = current.flipped();
        self.grid.set(row, col, state)?;
        self.observer.cell_changed(row, col, state);
        self.observer.counts_changed(self.grid.counts());
        Ok(state)
    }

    /// Advance one generation.
    pub fn step(&mut self) -> StepReport {
        let report = transition::step(&mut self.grid);
        self.generation += 1;
        for change in &report.changes {
            self.observer.cell_changed(change.row, change.col, change.state);
        }
        self.observer.counts_changed(report.counts);
        report
    }

    pub fn is_running(&self) -> bool {
        self.run_loop.is_running()
    }

    pub fn start(&mut self) -> bool {
        self.run_loop.start()
    }

    pub fn stop(&mut self) -> bool {
        self.run_loop.stop()
    }

    pub fn toggle_running(&mut self) -> bool {
        self.run_loop.toggle()
    }

    /// Let a UI know when ticks arrive so it can call `pump`.
    pub fn set_tick_waker(&mut self, waker: TickWaker) {
        self.run_loop.set_waker(waker);
    }

    /// Run one step per tick delivered since the last call. Returns the steps taken.
    pub fn pump(&mut self) -> usize {
        let due = self.run_loop.take_due();
        for _ in 0..due {
            self.step();
        }
        due
    }

    /// Fresh random grid of the current size.
    pub fn restart(&mut self) -> Result<()> {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        self.replace_grid(rows, cols)
    }

    /// Change one side of the grid from the raw text of an input field.
    pub fn request_resize(&mut self, axis: Axis, text: &str) -> Result<ResizeOutcome> {
        let value = lifecycle::parse_dimension(text);
        let (rows, cols) = match axis {
            Axis::Rows => (value, self.grid.cols() as f64),
            Axis::Cols => (self.grid.rows() as f64, value),
        };
        self.resize(rows, cols)
    }

    /// Replace the grid with a random one of `rows x cols` after validation.
    ///
    /// On error the grid, generation and run state are untouched.
    pub fn resize(&mut self, rows: f64, cols: f64) -> Result<ResizeOutcome> {
        if rows == self.grid.rows() as f64 && cols == self.grid.cols() as f64 {
            return Ok(ResizeOutcome::Unchanged);
        }
        let (rows, cols) = lifecycle::validate_resize(rows, cols, &self.bounds).inspect_err(|err| {
            log::warn!("resize rejected: {err}");
        })?;
        self.replace_grid(rows, cols)?;
        Ok(ResizeOutcome::Replaced { rows, cols })
    }

    /// Pull the viewport size and recompute the size bounds.
    pub fn refresh_bounds(&mut self, viewport: &impl Viewport) -> SizeBounds {
        let (width, height) = viewport.viewport_size();
        let bounds = lifecycle::compute_size_bounds(width, height, self.config.min_cell_px);
        if bounds != self.bounds {
            log::debug!("size bounds now {}x{}", bounds.max_rows, bounds.max_cols);
            self.bounds = bounds;
        }
        bounds
    }

    fn replace_grid(&mut self, rows: usize, cols: usize) -> Result<()> {
        // Never let a run survive into a new grid.
        self.run_loop.stop();

        // Built aside so a failed allocation leaves the current grid in place.
        let mut grid = GridStore::new(rows, cols)?;
        lifecycle::randomize(&mut grid, &mut self.rng, self.config.alive_probability);
        self.grid = grid;
        self.generation = 0;
        log::info!("grid replaced: {rows}x{cols}, {} alive", self.grid.counts().alive);
        self.announce_grid();
        Ok(())
    }

    fn announce_grid(&mut self) {
        self.observer.grid_replaced(self.grid.rows(), self.grid.cols());
        for (row, col) in self.grid.alive_cells() {
            self.observer.cell_changed(row, col, Cell::Alive);
        }
        self.observer.counts_changed(self.grid.counts());
    }
}
