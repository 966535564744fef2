//! Example: Moving-window function scope
//!
//! What it demonstrates
//! - Launching the function scope on its own with a custom start expression.
//! - The sample window travelling along the x axis at the configured speed;
//!   type a new expression and commit it with Enter to swap the curve.
//!
//! How to run
//! ```bash
//! cargo run --example function_scope
//! ```

use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use wavescope::{run_wavescope, DemoLayout, FunctionConfig, WavescopeConfig};

fn main() -> eframe::Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    let cfg = WavescopeConfig {
        title: "Function scope".to_string(),
        layout: DemoLayout::FunctionScope,
        function: FunctionConfig {
            expression: "sin(x) * exp(-0.1 * x)".to_string(),
            window_width: 12.0,
            speed: 1.0,
        },
        ..Default::default()
    };
    run_wavescope(cfg)
}
