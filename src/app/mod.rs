//! The eframe application hosting the demo panels.
//!
//! [`WavescopeApp`] owns one or both demo panels per the configured
//! [`DemoLayout`], drives their shared tick cadence from the repaint loop
//! and lays them out in the native window. The [`run_wavescope()`] entry
//! point lives in a sub-module.

mod run;

pub use run::run_wavescope;

use eframe::egui;

use crate::config::{DemoLayout, WavescopeConfig};
use crate::panels::{FunctionScopePanel, SineWavePanel};
use crate::tick::TickTimer;

/// Hosts the demo panels and delivers their ticks.
pub struct WavescopeApp {
    sine: Option<SineWavePanel>,
    function: Option<FunctionScopePanel>,
    timer: TickTimer,
}

impl WavescopeApp {
    pub fn new(cfg: &WavescopeConfig) -> Self {
        let sine = match cfg.layout {
            DemoLayout::SineWave | DemoLayout::Both => Some(SineWavePanel::new(cfg.sine)),
            DemoLayout::FunctionScope => None,
        };
        let function = match cfg.layout {
            DemoLayout::FunctionScope | DemoLayout::Both => {
                Some(FunctionScopePanel::new(&cfg.function))
            }
            DemoLayout::SineWave => None,
        };
        Self {
            sine,
            function,
            timer: TickTimer::new(),
        }
    }

    pub fn sine_panel(&self) -> Option<&SineWavePanel> {
        self.sine.as_ref()
    }

    pub fn function_panel(&self) -> Option<&FunctionScopePanel> {
        self.function.as_ref()
    }

    /// Compose one frame: deliver due ticks, then lay out the hosted panels.
    ///
    /// Takes a plain [`egui::Context`], so it also runs embedded in another
    /// egui application or under a windowless test context.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Deliver due ticks before rendering so a frame never shows a
        // half-advanced model.
        let ticks = self.timer.poll();
        if let Some(panel) = &mut self.sine {
            panel.apply_ticks(ticks);
        }
        if let Some(panel) = &mut self.function {
            panel.apply_ticks(ticks);
        }

        match (&mut self.sine, &mut self.function) {
            (Some(sine), Some(function)) => {
                let half = ctx.input(|i| i.content_rect()).width() * 0.5;
                egui::SidePanel::left("sine_wave_demo")
                    .resizable(true)
                    .default_width(half)
                    .show(ctx, |ui| sine.ui(ui));
                egui::CentralPanel::default().show(ctx, |ui| function.ui(ui));
            }
            (Some(sine), None) => {
                egui::CentralPanel::default().show(ctx, |ui| sine.ui(ui));
            }
            (None, Some(function)) => {
                egui::CentralPanel::default().show(ctx, |ui| function.ui(ui));
            }
            (None, None) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.label("No demo configured");
                });
            }
        }

        // Request continuous repainting (~60 fps).
        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for WavescopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}
