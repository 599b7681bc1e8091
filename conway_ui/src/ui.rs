// ui.rs - Controls, info bar and grid painter
// Everything drawn here comes from the CellView; input goes through Simulation.

use eframe::egui;
use egui::{Color32, Key, Rect, Sense, Vec2};
use std::time::Instant;

use conway::{Axis, ResizeOutcome, Viewport};

use crate::ConwayApp;
use crate::notice::Notice;

/// The window's inner area, which bounds how many cells fit on screen.
struct ScreenViewport(Rect);

impl Viewport for ScreenViewport {
    fn viewport_size(&self) -> (f32, f32) {
        (self.0.width(), self.0.height())
    }
}

/// After a resize attempt the fields always show the grid's real size
/// `rows x cols`. A rejected user value is explained in the notice.
fn settle_size_fields(
    result: &conway::Result<ResizeOutcome>,
    (rows, cols): (usize, usize),
    rows_text: &mut String,
    cols_text: &mut String,
    notice: &mut Notice,
    now: Instant,
) {
    match result {
        Ok(ResizeOutcome::Replaced { rows, cols }) => log::info!("resized to {rows}x{cols}"),
        Ok(ResizeOutcome::Unchanged) => {}
        Err(err) if err.is_user_facing() => notice.show(err.to_string(), now),
        Err(err) => log::error!("resize failed: {err}"),
    }
    *rows_text = rows.to_string();
    *cols_text = cols.to_string();
}

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any click dismisses the alert, like clicking outside it would.
        if ctx.input(|i| i.pointer.any_click()) {
            self.notice.dismiss();
        }

        if let Some(sim) = self.sim.as_mut() {
            sim.refresh_bounds(&ScreenViewport(ctx.screen_rect()));
            sim.pump();
        }
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));
        egui::TopBottomPanel::bottom("info_bar").show(ctx, |ui| self.info_bar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.sim.is_none() && self.init_error.is_none() {
                self.init_simulation(ctx, ui.available_size(), ctx.screen_rect());
                ctx.request_repaint();
            }
            if let Some(err) = &self.init_error {
                ui.colored_label(Color32::RED, err.as_str());
                return;
            }
            self.grid_painter(ui);
        });

        self.notice_window(ctx);
        self.about_window(ctx);
    }
}

impl ConwayApp {
    /// Space runs/pauses, right arrow steps. Ignored while typing into a field.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (space, right) = ctx.input(|i| (i.key_pressed(Key::Space), i.key_pressed(Key::ArrowRight)));
        if let Some(sim) = self.sim.as_mut() {
            if space {
                sim.toggle_running();
            }
            if right {
                sim.step();
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let Some(sim) = self.sim.as_mut() else { return };
        let mut commit = None;

        ui.horizontal(|ui| {
            if ui.button("⏭ Step").on_hover_text("Step (→)").clicked() {
                sim.step();
            }

            let (run_text, run_hint) = if sim.is_running() {
                ("⏸ Pause", "Pause (Space)")
            } else {
                ("▶ Run", "Run (Space)")
            };
            if ui.button(run_text).on_hover_text(run_hint).clicked() {
                sim.toggle_running();
            }

            if ui.button("🎲 Restart").on_hover_text("New random grid").clicked() {
                if let Err(err) = sim.restart() {
                    log::error!("restart failed: {err}");
                }
            }

            if ui.button("About").clicked() {
                sim.stop();
                self.show_about = true;
            }

            ui.separator();

            ui.label("Rows:");
            let rows = ui.add(egui::TextEdit::singleline(&mut self.rows_text).desired_width(40.0));
            ui.label("×");
            ui.label("Cols:");
            let cols = ui.add(egui::TextEdit::singleline(&mut self.cols_text).desired_width(40.0));
            ui.label(format!("= {}", sim.grid().rows() * sim.grid().cols()));

            if rows.lost_focus() {
                commit = Some(Axis::Rows);
            } else if cols.lost_focus() {
                commit = Some(Axis::Cols);
            }
        });

        if let Some(axis) = commit {
            self.commit_resize(axis);
        }
    }

    /// Apply the edited rows/cols field.
    fn commit_resize(&mut self, axis: Axis) {
        let Some(sim) = self.sim.as_mut() else { return };
        let text = match axis {
            Axis::Rows => self.rows_text.clone(),
            Axis::Cols => self.cols_text.clone(),
        };
        let result = sim.request_resize(axis, &text);
        let size = (sim.grid().rows(), sim.grid().cols());
        settle_size_fields(
            &result,
            size,
            &mut self.rows_text,
            &mut self.cols_text,
            &mut self.notice,
            Instant::now(),
        );
    }

    fn info_bar(&mut self, ui: &mut egui::Ui) {
        let Some(sim) = self.sim.as_ref() else { return };
        let counts = sim.observer().counts();
        ui.horizontal(|ui| {
            ui.colored_label(self.live_color, format!("#alive: {}", counts.alive));
            ui.colored_label(self.dead_color, format!("#dead: {}", counts.dead));
            ui.separator();
            ui.label(format!("{} × {} = {}", sim.grid().rows(), sim.grid().cols(), counts.total()));
            ui.separator();
            ui.label(format!("Generation: {}", sim.generation()));
            ui.separator();
            let bounds = sim.bounds();
            ui.label(format!("Max: {} × {}", bounds.max_rows, bounds.max_cols));
            if sim.is_running() {
                ui.separator();
                ui.label("running");
            }
        });
    }

    fn grid_painter(&mut self, ui: &mut egui::Ui) {
        let Some(sim) = self.sim.as_mut() else { return };

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, Color32::BLACK);

        let (rows, cols) = (sim.grid().rows(), sim.grid().cols());
        if rows == 0 || cols == 0 {
            return;
        }
        let cell = Vec2::new(rect.width() / cols as f32, rect.height() / rows as f32);

        // Press-and-drag toggles every cell entered, once per entry.
        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos().filter(|p| rect.contains(*p)) {
                let col = (((pos.x - rect.min.x) / cell.x) as usize).min(cols - 1);
                let row = (((pos.y - rect.min.y) / cell.y) as usize).min(rows - 1);
                if self.last_touched != Some((row, col)) {
                    if let Err(err) = sim.toggle(row, col) {
                        log::error!("toggle at ({row}, {col}) failed: {err}");
                    }
                    self.last_touched = Some((row, col));
                }
            }
        } else {
            self.last_touched = None;
        }

        let view = sim.observer();
        for row in 0..view.rows() {
            for col in 0..view.cols() {
                let min = rect.min + Vec2::new(col as f32 * cell.x, row as f32 * cell.y);
                let cell_rect = Rect::from_min_size(min, cell).shrink(0.5);
                let color = if view.is_alive(row, col) {
                    self.live_color
                } else {
                    self.dead_color
                };
                painter.rect_filled(cell_rect, 1.0, color);
            }
        }
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let Some(message) = self.notice.visible(now).map(str::to_owned) else { return };

        egui::Window::new("notice")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_TOP, Vec2::new(0.0, 48.0))
            .show(ctx, |ui| {
                ui.colored_label(Color32::from_rgb(255, 210, 120), message);
            });

        if let Some(left) = self.notice.remaining(now) {
            ctx.request_repaint_after(left);
        }
    }

    fn about_window(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.heading("Conway's Game of Life");
                ui.label("Every cell has eight neighbours; the grid wraps around at its edges.");
                ui.label("A live cell with two or three live neighbours survives.");
                ui.label("A dead cell with exactly three live neighbours comes alive.");
                ui.label("Every other cell dies or stays dead.");
                ui.separator();
                ui.label("Click or drag across cells to toggle them.");
                ui.label("Space: run / pause    →: single step");
                ui.label(format!(
                    "Cells can't be smaller than {} pixels, which limits rows and columns.",
                    self.config.min_cell_px
                ));
            });
        if !open {
            self.show_about = false;
        }
    }
}
