//! Example: Slider-driven sine wave
//!
//! What it demonstrates
//! - Launching a single-demo window with `run_wavescope` and
//!   `DemoLayout::SineWave`.
//! - Four sliders reshaping the curve while the 100 ms tick keeps
//!   randomizing the plot title.
//!
//! How to run
//! ```bash
//! cargo run --example sine_wave
//! ```

use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use wavescope::{run_wavescope, DemoLayout, WavescopeConfig};

fn main() -> eframe::Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    let cfg = WavescopeConfig {
        title: "Sine wave".to_string(),
        layout: DemoLayout::SineWave,
        ..Default::default()
    };
    run_wavescope(cfg)
}
