//! Controls and plot for the function scope demo.

use eframe::egui;
use egui::Ui;
use egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;

use crate::config::FunctionConfig;
use crate::sampler::{FunctionSampler, SPEED_RANGE, WINDOW_WIDTH_RANGE};

pub struct FunctionScopePanel {
    model: FunctionSampler,
    expression_input: String,
    committed_expression: String,
}

impl FunctionScopePanel {
    pub fn new(config: &FunctionConfig) -> Self {
        let model = FunctionSampler::new(&config.expression, config.window_width, config.speed);
        Self {
            model,
            expression_input: config.expression.clone(),
            committed_expression: config.expression.clone(),
        }
    }

    pub fn model(&self) -> &FunctionSampler {
        &self.model
    }

    /// Deliver due ticks to the model, oldest first.
    pub fn apply_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.model.on_tick();
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        egui::SidePanel::left("function_scope_controls")
            .resizable(false)
            .default_width(230.0)
            .show_inside(ui, |ui| self.render_controls(ui));
        egui::CentralPanel::default().show_inside(ui, |ui| self.render_plot(ui));
    }

    fn render_controls(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        ui.label("f(x)");
        let resp = ui.add(egui::TextEdit::singleline(&mut self.expression_input));
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        let commit = (enter && resp.has_focus()) || resp.lost_focus();
        if commit && self.expression_input != self.committed_expression {
            self.committed_expression = self.expression_input.clone();
            self.model.on_expression_changed(&self.committed_expression);
        }

        ui.add_space(4.0);
        ui.label("window width");
        let mut width = self.model.window_width();
        let resp = ui.add(egui::Slider::new(&mut width, WINDOW_WIDTH_RANGE));
        if resp.changed() {
            self.model.on_window_width_changed(width);
        }

        ui.add_space(4.0);
        ui.label("speed");
        let mut speed = self.model.speed();
        let resp = ui.add(egui::Slider::new(&mut speed, SPEED_RANGE).suffix(" x/s"));
        if resp.changed() {
            self.model.on_speed_changed(speed);
        }

        ui.add_space(8.0);
        if ui
            .button(format!("{ARROW_COUNTER_CLOCKWISE} Reset time"))
            .on_hover_text("Jump the window back to x = 0")
            .clicked()
        {
            self.model.on_reset_time();
        }
    }

    fn render_plot(&mut self, ui: &mut Ui) {
        ui.heading(self.model.title());
        super::draw_pinned_plot(
            ui,
            "function_scope_plot",
            "f(x)",
            self.model.series().points(),
            self.model.x_range(),
            self.model.y_range(),
        );
    }
}
