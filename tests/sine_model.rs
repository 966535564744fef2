use std::f64::consts::PI;

use approx::assert_relative_eq;
use wavescope::{SineParam, SineParams, SineWaveModel, SAMPLE_COUNT};

#[test]
fn initial_series_is_a_plain_sine_over_four_periods() {
    let model = SineWaveModel::new(SineParams::default());
    let s = model.series();
    assert_eq!(s.len(), SAMPLE_COUNT);
    assert_eq!(s.xs()[0], 0.0);
    assert_eq!(s.xs()[SAMPLE_COUNT - 1], 4.0 * PI);
    for (&x, &y) in s.xs().iter().zip(s.ys()) {
        assert_relative_eq!(y, x.sin(), epsilon = 1e-12);
    }
    assert_eq!(model.revision(), 0);
    assert_eq!(model.title(), "my sine wave");
}

#[test]
fn slider_move_recomputes_with_the_formula() {
    let mut model = SineWaveModel::new(SineParams::default());
    model.on_parameter_changed(SineParam::Amplitude, 2.0);
    assert_eq!(model.revision(), 1);
    for (&x, &y) in model.series().xs().iter().zip(model.series().ys()) {
        assert_relative_eq!(y, 2.0 * x.sin().powi(2), epsilon = 1e-12);
    }
}

#[test]
fn slider_move_leaves_other_parameters_untouched() {
    let mut model = SineWaveModel::new(SineParams::default());
    model.on_parameter_changed(SineParam::Phase, 1.5);
    let p = model.params();
    assert_eq!(p.offset, 0.0);
    assert_eq!(p.amplitude, 1.0);
    assert_eq!(p.phase, 1.5);
    assert_eq!(p.frequency, 1.0);
    assert_eq!(model.revision(), 1);
}

#[test]
fn full_formula_with_every_parameter_set() {
    let mut model = SineWaveModel::new(SineParams::default());
    model.on_parameter_changed(SineParam::Offset, 0.7);
    model.on_parameter_changed(SineParam::Amplitude, 1.8);
    model.on_parameter_changed(SineParam::Phase, 0.4);
    model.on_parameter_changed(SineParam::Frequency, 2.5);
    assert_eq!(model.revision(), 4);
    for (&x, &y) in model.series().xs().iter().zip(model.series().ys()) {
        assert_relative_eq!(y, 1.8 * (2.5 * x + 0.4).sin().powi(2) + 0.7, epsilon = 1e-12);
    }
}

#[test]
fn tick_randomizes_the_title_and_leaves_the_series_alone() {
    let mut model = SineWaveModel::new(SineParams::default());
    let before = model.series().clone();
    let rev = model.revision();
    model.on_tick();
    assert_ne!(model.title(), "my sine wave");
    assert!(
        model.title().parse::<f64>().is_ok(),
        "randomized title should be a decimal number, got '{}'",
        model.title()
    );
    assert_eq!(model.series(), &before);
    assert_eq!(model.revision(), rev);
}

#[test]
fn title_edit_randomizes_instead_of_storing_the_text() {
    let mut model = SineWaveModel::new(SineParams::default());
    model.on_title_edited("hello");
    assert_ne!(model.title(), "hello");
    assert!(model.title().parse::<f64>().is_ok());
}

#[test]
fn axis_ranges_are_fixed_regardless_of_parameters() {
    let mut model = SineWaveModel::new(SineParams::default());
    model.on_parameter_changed(SineParam::Offset, 5.0);
    model.on_parameter_changed(SineParam::Amplitude, -5.0);
    assert_eq!(model.x_range().min, 0.0);
    assert_eq!(model.x_range().max, 4.0 * PI);
    assert_eq!(model.y_range().min, -2.5);
    assert_eq!(model.y_range().max, 2.5);
}
