// main.rs - Desktop front end for the Conway simulation core

use anyhow::Context;
use eframe::egui;
use egui::Color32;

use conway::{SimConfig, Simulation};

mod notice; // Self-dismissing alert
mod ui;     // eframe::App impl: controls, info bar and grid painter
mod view;   // Observer that mirrors the grid for drawing

use notice::Notice;
use view::CellView;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let runtime = tokio::runtime::Runtime::new().context("failed to start the timer runtime")?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(ConwayApp::new(runtime, SimConfig::default()))),
    )
    .map_err(|err| anyhow::anyhow!("window closed with error: {err}"))
}

pub struct ConwayApp {
    // Created on the first frame, once the drawing surface size is known.
    sim: Option<Simulation<CellView>>,
    init_error: Option<String>,
    config: SimConfig,

    rows_text: String,
    cols_text: String,
    notice: Notice,
    show_about: bool,
    // Last cell toggled by the current drag, so hovering does not flicker it.
    last_touched: Option<(usize, usize)>,
    live_color: Color32,
    dead_color: Color32,

    // Declared last so the simulation's timer task is dropped first.
    runtime: tokio::runtime::Runtime,
}

impl ConwayApp {
    pub fn new(runtime: tokio::runtime::Runtime, config: SimConfig) -> Self {
        Self {
            sim: None,
            init_error: None,
            notice: Notice::new(config.notice_ttl),
            config,
            rows_text: String::new(),
            cols_text: String::new(),
            show_about: false,
            last_touched: None,
            live_color: Color32::from_rgb(97, 184, 121),
            dead_color: Color32::from_rgb(189, 106, 98),
            runtime,
        }
    }

    /// Build the simulation sized for `surface` inside a window of `window`.
    pub(crate) fn init_simulation(&mut self, ctx: &egui::Context, surface: egui::Vec2, window: egui::Rect) {
        let (rows, cols) = conway::initial_dimensions(
            (surface.x, surface.y),
            (window.width(), window.height()),
            window.width(),
        );
        let viewport = (window.width(), window.height());
        match Simulation::new(
            self.config.clone(),
            &viewport,
            rows,
            cols,
            self.runtime.handle().clone(),
            CellView::default(),
        ) {
            Ok(mut sim) => {
                let repaint = ctx.clone();
                sim.set_tick_waker(std::sync::Arc::new(move || repaint.request_repaint()));
                log::info!("starting with a {rows}x{cols} grid");
                self.sim = Some(sim);
                self.sync_size_fields();
            }
            Err(err) => {
                log::error!("could not create the grid: {err}");
                self.init_error = Some(err.to_string());
            }
        }
    }

    /// Put the fields back to the grid's real size.
    pub fn sync_size_fields(&mut self) {
        if let Some(sim) = &self.sim {
            self.rows_text = sim.grid().rows().to_string();
            self.cols_text = sim.grid().cols().to_string();
        }
    }
}
