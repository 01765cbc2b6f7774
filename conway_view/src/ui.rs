// ui.rs - Configuration form, world view and status panel

use std::time::{Duration, Instant};

use conway::PATTERNS;
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::app::{Form, LifeView};

impl eframe::App for LifeView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.tick() {
            ctx.request_repaint();
        }

        egui::SidePanel::left("configuration").show(ctx, |ui| {
            ui.heading("Configuration");
            ui.separator();
            self.configuration(ui, ctx);
        });

        egui::SidePanel::right("status").min_width(160.0).show(ctx, |ui| {
            ui.heading("Status");
            ui.separator();
            self.status_panel(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("World");
            ui.separator();
            self.world(ui);
        });

        // Keep the clock ticking while running
        if self.is_running {
            ctx.request_repaint_after(self.update_interval.min(Duration::from_millis(50)));
        }
    }
}

impl LifeView {
    fn configuration(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Size:");
            changed |= ui
                .add(egui::DragValue::new(&mut self.form.size).clamp_range(Form::SIZE_RANGE))
                .changed();
        });
        changed |= ui
            .add(egui::Slider::new(&mut self.form.percent, 0..=100).text("% populated"))
            .changed();
        changed |= ui.checkbox(&mut self.form.wrap_east_west, "Connected East-West").changed();
        changed |= ui.checkbox(&mut self.form.wrap_north_south, "Connected North-South").changed();
        if changed {
            self.apply_form();
        }

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("🎲 Reseed").clicked() {
                self.reseed();
            }
            if ui.button("⏹ Clear").clicked() {
                self.clear();
            }
        });

        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            let can_run = !self.sim.is_stable();
            if ui.add_enabled(can_run, egui::Button::new(button_text)).clicked() {
                self.is_running = !self.is_running;
                if self.is_running {
                    self.last_update = Instant::now();
                }
            }
            let can_step = can_run && !self.is_running;
            if ui.add_enabled(can_step, egui::Button::new("⏭ Step")).clicked() {
                self.step_once();
            }
        });

        ui.separator();

        // Pattern dropdown
        egui::ComboBox::from_id_source("pattern_selector")
            .selected_text(PATTERNS[self.selected_pattern].name)
            .show_ui(ui, |ui| {
                for (i, pattern) in PATTERNS.iter().enumerate() {
                    ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                }
            });
        if ui.button("Apply Pattern").clicked() {
            self.apply_selected_pattern();
        }

        ui.separator();

        let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
        if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
            self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
        }

        ui.horizontal(|ui| {
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });

        ui.separator();

        if ui.button("Quit").clicked() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn status_panel(&self, ui: &mut egui::Ui) {
        ui.label(self.status());

        if let Some(report) = &self.last_report {
            ui.label(format!("Born: {}  Died: {}", report.births, report.deaths));
        }

        let size = self.grid().size();
        let live_cells = self.grid().population();
        let total = size * size;
        ui.separator();
        ui.label(format!("Live cells: {}", live_cells));
        ui.label(format!("Dead cells: {}", total - live_cells));
        ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));

        if let Some(message) = &self.message {
            ui.separator();
            ui.colored_label(Color32::LIGHT_RED, message.as_str());
        }
    }

    fn world(&mut self, ui: &mut egui::Ui) {
        let snapshot = self.grid().snapshot();
        let size = snapshot.size();

        let spacing = if size > 100 { 0.0 } else { 0.5 };
        let available = ui.available_size();
        let box_size = ((available.x.min(available.y) / size as f32) - spacing).clamp(1.0, 24.0);

        let start_pos = ui.cursor().min;
        let total_size = Vec2::splat((box_size + spacing) * size as f32 - spacing);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        // Fill background
        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

        // x runs east, y runs south
        for x in 0..size {
            for y in 0..size {
                let rect = Rect::from_min_size(
                    egui::pos2(
                        start_pos.x + x as f32 * (box_size + spacing),
                        start_pos.y + y as f32 * (box_size + spacing),
                    ),
                    Vec2::splat(box_size),
                );
                let cell_color =
                    if snapshot.is_alive(x, y) { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, cell_color);
                if spacing > 0.0 {
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }
        }

        // Toggle the clicked cell while paused
        if !self.is_running && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - start_pos;
                let x = (offset.x / (box_size + spacing)) as usize;
                let y = (offset.y / (box_size + spacing)) as usize;
                if x < size && y < size {
                    self.toggle_cell(x, y);
                }
            }
        }
    }
}
