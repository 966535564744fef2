use std::f64::consts::PI;

use approx::assert_relative_eq;
use wavescope::expr::compile;
use wavescope::series::SampleSeries;
use wavescope::{AxisRange, FunctionSampler, SAMPLE_COUNT};

#[test]
fn identity_expression_over_the_unit_interval_is_exact() {
    let e = compile("x").unwrap();
    let s = SampleSeries::from_fn(0.0, 1.0, 3, |x| e.eval(x).unwrap_or(0.0));
    assert_eq!(s.xs(), &[0.0, 0.5, 1.0]);
    assert_eq!(s.ys(), &[0.0, 0.5, 1.0]);
}

#[test]
fn construction_publishes_the_initial_window() {
    let s = FunctionSampler::new("sin(x)", 10.0, 1.0);
    assert_eq!(s.revision(), 0);
    assert_eq!(s.elapsed(), 0.0);
    assert_eq!(s.series().len(), SAMPLE_COUNT);
    assert_eq!(s.x_range(), AxisRange::new(0.0, 10.0));
    assert_eq!(s.title(), "sin(x)");
}

#[test]
fn ticks_advance_elapsed_by_speed_scaled_tenths() {
    let mut s = FunctionSampler::new("x", 5.0, 2.0);
    for _ in 0..7 {
        s.on_tick();
    }
    assert_relative_eq!(s.elapsed(), 2.0 * 0.1 * 7.0, epsilon = 1e-12);
    assert_relative_eq!(s.x_range().min, 1.4, epsilon = 1e-12);
    assert_relative_eq!(s.x_range().max, 6.4, epsilon = 1e-12);
    assert_eq!(s.revision(), 7);
}

#[test]
fn x_range_matches_elapsed_and_width_exactly() {
    let mut s = FunctionSampler::new("x", 3.0, 1.7);
    for _ in 0..5 {
        s.on_tick();
    }
    assert_eq!(s.x_range().min, s.elapsed());
    assert_eq!(s.x_range().max, s.elapsed() + 3.0);
    assert_eq!(s.series().xs()[0], s.x_range().min);
    assert_eq!(s.series().xs()[SAMPLE_COUNT - 1], s.x_range().max);
}

#[test]
fn speed_change_takes_effect_on_the_next_tick_only() {
    let mut s = FunctionSampler::new("x", 5.0, 1.0);
    let rev = s.revision();
    s.on_speed_changed(0.5);
    // The window has not moved, so nothing is republished.
    assert_eq!(s.revision(), rev);
    assert_eq!(s.x_range(), AxisRange::new(0.0, 5.0));
    s.on_tick();
    assert_relative_eq!(s.elapsed(), 0.05, epsilon = 1e-12);
    assert_eq!(s.revision(), rev + 1);
}

#[test]
fn window_width_change_resamples_in_place() {
    let mut s = FunctionSampler::new("x", 5.0, 1.0);
    s.on_tick();
    let rev = s.revision();
    s.on_window_width_changed(2.0);
    assert_eq!(s.revision(), rev + 1);
    assert_relative_eq!(s.x_range().min, 0.1, epsilon = 1e-12);
    assert_relative_eq!(s.x_range().max, 2.1, epsilon = 1e-12);
}

#[test]
fn reset_time_leaves_published_state_stale_until_the_next_trigger() {
    let mut s = FunctionSampler::new("x", 5.0, 1.0);
    for _ in 0..10 {
        s.on_tick();
    }
    let stale_x = s.x_range();
    let stale_series = s.series().clone();
    let rev = s.revision();

    s.on_reset_time();
    assert_eq!(s.elapsed(), 0.0);
    // Published data still shows the pre-reset window.
    assert_eq!(s.x_range(), stale_x);
    assert_eq!(s.series(), &stale_series);
    assert_eq!(s.revision(), rev);

    s.on_tick();
    assert_relative_eq!(s.x_range().min, 0.1, epsilon = 1e-12);
    assert_eq!(s.revision(), rev + 1);
}

#[test]
fn expression_change_resamples_the_current_window() {
    let mut s = FunctionSampler::new("x", 4.0, 1.0);
    s.on_tick();
    let rev = s.revision();
    s.on_expression_changed("x * x");
    assert_eq!(s.revision(), rev + 1);
    assert_eq!(s.title(), "x * x");
    let xs = s.series().xs();
    let ys = s.series().ys();
    for i in 0..xs.len() {
        assert_relative_eq!(ys[i], xs[i] * xs[i], epsilon = 1e-12);
    }
}

#[test]
fn unparseable_expression_degrades_the_whole_curve_to_zeros() {
    let mut s = FunctionSampler::new("x", 5.0, 1.0);
    s.on_expression_changed("sin(");
    assert_eq!(s.title(), "sin(");
    assert!(s.series().ys().iter().all(|&y| y == 0.0));
    assert_eq!(s.y_range(), AxisRange::new(0.0, 0.0));
    // The x window is still published exactly.
    assert_eq!(s.x_range(), AxisRange::new(0.0, 5.0));
}

#[test]
fn runaway_expression_degrades_to_the_zero_curve() {
    // Deeply nested input is rejected by the compiler like any other bad
    // text; the scope keeps publishing the exact window, all zeros.
    let mut s = FunctionSampler::new("x", 5.0, 1.0);
    let nested = format!("{}x{}", "(".repeat(50_000), ")".repeat(50_000));
    s.on_expression_changed(&nested);
    assert_eq!(s.title(), nested.as_str());
    assert!(s.series().ys().iter().all(|&y| y == 0.0));
    assert_eq!(s.y_range(), AxisRange::new(0.0, 0.0));
    assert_eq!(s.x_range(), AxisRange::new(0.0, 5.0));
}

#[test]
fn always_failing_expression_yields_the_degenerate_zero_state() {
    let s = FunctionSampler::new("1 / 0", 8.0, 1.0);
    assert_eq!(s.series().len(), SAMPLE_COUNT);
    assert!(s.series().ys().iter().all(|&y| y == 0.0));
    assert_eq!(s.y_range(), AxisRange::new(0.0, 0.0));
    assert_eq!(s.x_range(), AxisRange::new(0.0, 8.0));
}

#[test]
fn per_point_failures_degrade_only_their_sample() {
    // 1/x fails only at x = 0, the first sample of the window.
    let s = FunctionSampler::new("1 / x", 10.0, 1.0);
    let ys = s.series().ys();
    assert_eq!(ys[0], 0.0);
    assert!(ys[1..].iter().all(|&y| y != 0.0));
}

#[test]
fn y_range_tracks_the_sampled_extrema() {
    let s = FunctionSampler::new("sin(x)", 2.0 * PI, 1.0);
    let y = s.y_range();
    // 200 samples never land exactly on an extremum; the tolerance reflects
    // the sampling grid.
    assert_relative_eq!(y.min, -1.0, epsilon = 1e-3);
    assert_relative_eq!(y.max, 1.0, epsilon = 1e-3);
}
