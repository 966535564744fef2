//! Top-level entry point for running wavescope as a native window.

use eframe::egui;

use crate::config::{DemoLayout, WavescopeConfig};

use super::WavescopeApp;

/// Open a native window hosting the configured demos.
///
/// The call blocks until the window is closed.
pub fn run_wavescope(mut cfg: WavescopeConfig) -> eframe::Result<()> {
    let app = WavescopeApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        let size = match cfg.layout {
            DemoLayout::Both => egui::vec2(1280.0, 640.0),
            _ => egui::vec2(800.0, 600.0),
        };
        opts.viewport = opts.viewport.clone().with_inner_size(size);
    }

    log::info!("starting wavescope window '{title}'");

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
