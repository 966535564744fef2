//! Example: Both demos side by side
//!
//! What it demonstrates
//! - The default `DemoLayout::Both`: sine wave on the left, function scope
//!   on the right, sharing one tick cadence.
//!
//! How to run
//! ```bash
//! cargo run --example dual
//! ```

use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use wavescope::{run_wavescope, WavescopeConfig};

fn main() -> eframe::Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    run_wavescope(WavescopeConfig::default())
}
