//! Configuration types for the wavescope demos.

use crate::sine::SineParams;

// ─────────────────────────────────────────────────────────────────────────────
// DemoLayout – which demos the window hosts
// ─────────────────────────────────────────────────────────────────────────────

/// Selects the demo panels composed into the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoLayout {
    /// Only the slider-driven sine wave.
    SineWave,
    /// Only the moving-window function scope.
    FunctionScope,
    /// Both demos side by side.
    Both,
}

impl Default for DemoLayout {
    fn default() -> Self {
        DemoLayout::Both
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FunctionConfig – initial state of the function scope demo
// ─────────────────────────────────────────────────────────────────────────────

/// Initial state of the function scope demo.
#[derive(Clone, Debug)]
pub struct FunctionConfig {
    /// Expression the scope starts with. Default: `"sin(x)"`.
    pub expression: String,
    /// Width of the sample window on the x axis. Default: `10.0`.
    pub window_width: f64,
    /// Window travel in x units per second of wall time. Default: `1.0`.
    pub speed: f64,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            expression: "sin(x)".to_string(),
            window_width: 10.0,
            speed: 1.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WavescopeConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a wavescope window.
#[derive(Clone)]
pub struct WavescopeConfig {
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options. `None` gets a sensible default
    /// window size per layout.
    pub native_options: Option<eframe::NativeOptions>,
    /// Which demo panels to host.
    pub layout: DemoLayout,
    /// Initial slider values of the sine wave demo.
    pub sine: SineParams,
    /// Initial state of the function scope demo.
    pub function: FunctionConfig,
}

impl Default for WavescopeConfig {
    fn default() -> Self {
        Self {
            title: "Wavescope".to_string(),
            native_options: None,
            layout: DemoLayout::default(),
            sine: SineParams::default(),
            function: FunctionConfig::default(),
        }
    }
}
