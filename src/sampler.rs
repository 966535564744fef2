//! The moving-window function sampler demo model.
//!
//! The user types the curve as an expression in `x`. The model slides a
//! fixed-width window along the x axis at a configurable speed, resamples
//! the expression over the window on every trigger and republishes series
//! plus axis ranges wholesale.

use std::ops::RangeInclusive;

use crate::expr::{self, Expr};
use crate::series::{AxisRange, SampleSeries, SAMPLE_COUNT};
use crate::tick::TICK_PERIOD;

/// Widget range for the window width slider.
pub const WINDOW_WIDTH_RANGE: RangeInclusive<f64> = 0.1..=20.0;

/// Widget range for the speed slider. Zero freezes the window in place.
pub const SPEED_RANGE: RangeInclusive<f64> = 0.0..=2.0;

/// Model state behind the function scope demo.
///
/// Expression failures degrade silently: a string that does not compile
/// turns the whole curve into zeros, and a sample where evaluation fails
/// (division by zero, non-finite result) becomes `0.0` on its own. The
/// published x range is the exact sample window either way.
#[derive(Debug)]
pub struct FunctionSampler {
    expression: String,
    compiled: Option<Expr>,
    window_width: f64,
    speed: f64,
    elapsed: f64,
    series: SampleSeries,
    x_range: AxisRange,
    y_range: AxisRange,
    revision: u64,
}

impl FunctionSampler {
    /// Compile `expression` and publish the initial window `[0, window_width]`.
    pub fn new(expression: &str, window_width: f64, speed: f64) -> Self {
        let mut sampler = Self {
            expression: String::new(),
            compiled: None,
            window_width,
            speed,
            elapsed: 0.0,
            series: SampleSeries::from_fn(0.0, window_width, 0, |_| 0.0),
            x_range: AxisRange::new(0.0, window_width),
            y_range: AxisRange::new(0.0, 0.0),
            revision: 0,
        };
        sampler.store_expression(expression);
        sampler.resample_and_rescale();
        sampler
    }

    /// The expression source, also used as the plot headline.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn title(&self) -> &str {
        &self.expression
    }

    pub fn window_width(&self) -> f64 {
        self.window_width
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Speed-scaled time accumulated by ticks, the left edge of the window.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    /// The x window of the most recent resample. Stale after a time reset
    /// until the next trigger.
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    /// y bounds scanned from the most recent resample.
    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    /// Counts series republications since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the expression and republish the window under it.
    pub fn on_expression_changed(&mut self, expression: &str) {
        self.store_expression(expression);
        self.resample_and_rescale();
        self.revision += 1;
    }

    /// Advance time by one tick worth of window travel and republish.
    pub fn on_tick(&mut self) {
        self.elapsed += self.speed * TICK_PERIOD.as_secs_f64();
        self.resample_and_rescale();
        self.revision += 1;
    }

    /// Resize the window in place and republish.
    pub fn on_window_width_changed(&mut self, width: f64) {
        self.window_width = width;
        self.resample_and_rescale();
        self.revision += 1;
    }

    /// Store the new speed. The active window is unchanged, so nothing is
    /// republished; the new speed takes effect on the next tick.
    pub fn on_speed_changed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Jump the window back to the origin without republishing. The series
    /// and both axis ranges keep showing the pre-reset window until the
    /// next trigger.
    pub fn on_reset_time(&mut self) {
        self.elapsed = 0.0;
    }

    fn store_expression(&mut self, expression: &str) {
        self.expression = expression.to_string();
        self.compiled = expr::compile(expression).ok();
    }

    fn resample_and_rescale(&mut self) {
        let start = self.elapsed;
        let end = start + self.window_width;
        let compiled = self.compiled.as_ref();
        let series = SampleSeries::from_fn(start, end, SAMPLE_COUNT, |x| match compiled {
            Some(e) => e.eval(x).unwrap_or(0.0),
            None => 0.0,
        });
        self.y_range = series.y_bounds();
        self.series = series;
        self.x_range = AxisRange::new(start, end);
    }
}
