//! Panel composition: one controls-plus-plot panel per demo model.
//!
//! Each panel owns its model, translates widget events into the model's
//! callbacks and redraws the published series every frame. The plot
//! viewport is pinned to the ranges the model publishes; the user never
//! pans or zooms it.

mod function_ui;
mod sine_ui;

pub use function_ui::FunctionScopePanel;
pub use sine_ui::SineWavePanel;

use egui::Ui;
use egui_plot::{Line, Plot};

use crate::series::AxisRange;

const LINE_WIDTH: f32 = 3.0;

/// Draw one series as a single line with the view pinned to the published
/// axis ranges, degenerate ranges included.
fn draw_pinned_plot(
    ui: &mut Ui,
    id: &str,
    name: &str,
    points: Vec<[f64; 2]>,
    x: AxisRange,
    y: AxisRange,
) {
    // 60 % alpha blue
    let color = egui::Color32::from_rgba_unmultiplied(31, 119, 180, 153);
    Plot::new(id)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x.min..=x.max);
            plot_ui.set_plot_bounds_y(y.min..=y.max);
            plot_ui.line(Line::new(name, points).color(color).width(LINE_WIDTH));
        });
}
