//! Wavescope crate root: re-exports and module wiring.
//!
//! Two small interactive plots built on egui/eframe:
//! - A slider-driven sine wave (`sine`): four sliders shape a squared sine
//!   over a fixed window, with a periodically randomized title.
//! - A moving-window function scope (`sampler`): the curve is a user-typed
//!   expression in `x`, resampled over a window travelling along the axis.
//!
//! The implementation is split into cohesive modules:
//! - `series`: sample series and axis ranges, the published data shape
//! - `expr`: the sandboxed expression language behind the function scope
//! - `sine` / `sampler`: the two demo models, free of any UI types
//! - `tick`: the fixed 100 ms tick cadence derived from the repaint loop
//! - `config`: window, layout and initial-state configuration
//! - `panels`: widget strips and pinned plots, one panel per demo
//! - `app`: the eframe application and `run_wavescope` entry point

pub mod app;
pub mod config;
pub mod expr;
pub mod panels;
pub mod sampler;
pub mod series;
pub mod sine;
pub mod tick;

// Public re-exports for a compact external API
pub use app::{run_wavescope, WavescopeApp};
pub use config::{DemoLayout, FunctionConfig, WavescopeConfig};
pub use sampler::FunctionSampler;
pub use series::{AxisRange, SampleSeries, SAMPLE_COUNT};
pub use sine::{SineParam, SineParams, SineWaveModel};
pub use tick::{TickTimer, MAX_CATCHUP_TICKS, TICK_PERIOD};
