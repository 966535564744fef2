//! Controls and plot for the sine wave demo.

use eframe::egui;
use egui::Ui;

use crate::sine::{SineParam, SineParams, SineWaveModel};

/// Left controls strip plus central plot, the classic inputs-beside-figure
/// layout.
pub struct SineWavePanel {
    model: SineWaveModel,
    title_input: String,
    committed_title: String,
}

impl SineWavePanel {
    pub fn new(params: SineParams) -> Self {
        let model = SineWaveModel::new(params);
        let title_input = model.title().to_string();
        let committed_title = title_input.clone();
        Self {
            model,
            title_input,
            committed_title,
        }
    }

    pub fn model(&self) -> &SineWaveModel {
        &self.model
    }

    /// Deliver due ticks to the model, oldest first.
    pub fn apply_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.model.on_tick();
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        egui::SidePanel::left("sine_wave_controls")
            .resizable(false)
            .default_width(230.0)
            .show_inside(ui, |ui| self.render_controls(ui));
        egui::CentralPanel::default().show_inside(ui, |ui| self.render_plot(ui));
    }

    fn render_controls(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        ui.label("title");
        let resp = ui.add(egui::TextEdit::singleline(&mut self.title_input));
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        let commit = (enter && resp.has_focus()) || resp.lost_focus();
        // Only a changed value counts as an edit, like a change callback.
        if commit && self.title_input != self.committed_title {
            self.committed_title = self.title_input.clone();
            self.model.on_title_edited(&self.committed_title);
        }

        for param in SineParam::ALL {
            ui.add_space(4.0);
            ui.label(param.label());
            let mut value = self.model.param(param);
            let resp = ui.add(
                egui::Slider::new(&mut value, param.range()).step_by(param.step()),
            );
            if resp.changed() {
                self.model.on_parameter_changed(param, value);
            }
        }
    }

    fn render_plot(&mut self, ui: &mut Ui) {
        ui.heading(self.model.title());
        super::draw_pinned_plot(
            ui,
            "sine_wave_plot",
            "sine",
            self.model.series().points(),
            self.model.x_range(),
            self.model.y_range(),
        );
    }
}
