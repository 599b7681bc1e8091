// config.rs - Tunables for the simulation core

use std::time::Duration;

/// Period between generations while running.
pub const STEP_INTERVAL: Duration = Duration::from_millis(500);

/// Cells may never be drawn smaller than this many pixels on a side.
pub const MIN_CELL_PX: f32 = 10.0;

/// How long a rejected-resize notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_millis(2000);

/// Preferred cell side as a fraction of the larger window side.
pub const CELL_SCALE: f32 = 0.03;
/// Cell scale used on narrow screens so cells stay touchable.
pub const CELL_SCALE_NARROW: f32 = 0.06;
/// Screens narrower than this (in pixels) use `CELL_SCALE_NARROW`.
pub const NARROW_SCREEN_WIDTH: f32 = 800.0;

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub step_interval: Duration,
    pub min_cell_px: f32,
    pub notice_ttl: Duration,
    pub alive_probability: f64,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            step_interval: STEP_INTERVAL,
            min_cell_px: MIN_CELL_PX,
            notice_ttl: NOTICE_TTL,
            alive_probability: 0.5,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
