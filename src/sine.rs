//! The slider-driven sine wave demo model.
//!
//! Four sliders shape the steady-state curve `A * sin(f*x + phi)^2 + B`
//! over a fixed window of four periods. The curve only moves when a slider
//! does; the periodic tick merely randomizes the plot title.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::series::{AxisRange, SampleSeries, SAMPLE_COUNT};

/// Right edge of the fixed x window.
pub const SINE_X_MAX: f64 = 4.0 * PI;

const DEFAULT_TITLE: &str = "my sine wave";

/// The four tunable parameters, in the order their sliders are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SineParam {
    Offset,
    Amplitude,
    Phase,
    Frequency,
}

impl SineParam {
    pub const ALL: [SineParam; 4] = [
        SineParam::Offset,
        SineParam::Amplitude,
        SineParam::Phase,
        SineParam::Frequency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SineParam::Offset => "offset",
            SineParam::Amplitude => "amplitude",
            SineParam::Phase => "phase",
            SineParam::Frequency => "frequency",
        }
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            SineParam::Offset => -5.0..=5.0,
            SineParam::Amplitude => -5.0..=5.0,
            SineParam::Phase => 0.0..=2.0 * PI,
            SineParam::Frequency => 0.1..=5.1,
        }
    }

    /// Slider increment. `0.0` leaves the slider continuous.
    pub fn step(&self) -> f64 {
        match self {
            SineParam::Phase => 0.0,
            _ => 0.1,
        }
    }
}

/// Current slider values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineParams {
    pub offset: f64,
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

impl Default for SineParams {
    fn default() -> Self {
        Self {
            offset: 0.0,
            amplitude: 1.0,
            phase: 0.0,
            frequency: 1.0,
        }
    }
}

impl SineParams {
    pub fn get(&self, param: SineParam) -> f64 {
        match param {
            SineParam::Offset => self.offset,
            SineParam::Amplitude => self.amplitude,
            SineParam::Phase => self.phase,
            SineParam::Frequency => self.frequency,
        }
    }

    pub fn set(&mut self, param: SineParam, value: f64) {
        match param {
            SineParam::Offset => self.offset = value,
            SineParam::Amplitude => self.amplitude = value,
            SineParam::Phase => self.phase = value,
            SineParam::Frequency => self.frequency = value,
        }
    }

    /// The steady-state formula at one sample point.
    pub fn sample(&self, x: f64) -> f64 {
        self.amplitude * (self.frequency * x + self.phase).sin().powi(2) + self.offset
    }
}

/// Model state behind the sine wave demo.
#[derive(Debug)]
pub struct SineWaveModel {
    params: SineParams,
    series: SampleSeries,
    title: String,
    revision: u64,
}

impl SineWaveModel {
    /// Build the model with the given slider values.
    ///
    /// The very first curve is a plain `sin(x)` regardless of `params`. It
    /// is replaced by the slider formula on the first slider move and the
    /// mismatch is visible until then.
    pub fn new(params: SineParams) -> Self {
        Self {
            params,
            series: SampleSeries::from_fn(0.0, SINE_X_MAX, SAMPLE_COUNT, f64::sin),
            title: DEFAULT_TITLE.to_string(),
            revision: 0,
        }
    }

    pub fn params(&self) -> &SineParams {
        &self.params
    }

    pub fn param(&self, param: SineParam) -> f64 {
        self.params.get(param)
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Counts series republications since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Fixed x window, four periods of the unit sine.
    pub fn x_range(&self) -> AxisRange {
        AxisRange::new(0.0, SINE_X_MAX)
    }

    /// Fixed y window. Amplitude and offset can push the curve outside it;
    /// the view clips rather than rescales.
    pub fn y_range(&self) -> AxisRange {
        AxisRange::new(-2.5, 2.5)
    }

    /// Store one slider value, leave the other three untouched and
    /// republish the curve from the formula.
    pub fn on_parameter_changed(&mut self, param: SineParam, value: f64) {
        self.params.set(param, value);
        self.rebuild_series();
        self.revision += 1;
    }

    /// Periodic callback. Randomizes the title, leaves the curve alone.
    pub fn on_tick(&mut self) {
        self.randomize_title();
    }

    /// Title box commit. The submitted text is ignored and the title is
    /// randomized instead, same as a tick.
    pub fn on_title_edited(&mut self, _submitted: &str) {
        self.randomize_title();
    }

    fn rebuild_series(&mut self) {
        let params = self.params;
        self.series = SampleSeries::from_fn(0.0, SINE_X_MAX, SAMPLE_COUNT, |x| params.sample(x));
    }

    fn randomize_title(&mut self) {
        self.title = rand::rng().random::<f64>().to_string();
    }
}

impl Default for SineWaveModel {
    fn default() -> Self {
        Self::new(SineParams::default())
    }
}
