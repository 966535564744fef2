//! Sample series and axis ranges shared by both demo models.
//!
//! A [`SampleSeries`] is the unit of publication towards the plot surface: it
//! is rebuilt from scratch on every relevant event and handed to the renderer
//! wholesale, never patched point by point.

/// Number of samples in every series published by the demo models.
pub const SAMPLE_COUNT: usize = 200;

/// Evenly spaced values covering `[start, end]`, both endpoints included.
///
/// The final element is pinned to `end` so window edges land exactly on the
/// requested bounds.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            xs[n - 1] = end;
            xs
        }
    }
}

/// Inclusive axis bounds, published alongside a series.
///
/// `min == max` is legal (a constant or fully-degraded curve) and is handed
/// to the view as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range (`max - min`).
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// An ordered pair of equal-length sample vectors, `(xs[i], ys[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSeries {
    /// Sample `f` at `n` evenly spaced points over `[start, end]`.
    pub fn from_fn<F>(start: f64, end: f64, n: usize, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        let xs = linspace(start, end, n);
        let ys = xs.iter().map(|&x| f(x)).collect();
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// The series as `[x, y]` pairs, the shape the egui_plot line consumes.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| [x, y]).collect()
    }

    /// Scan the y values for their minimum and maximum.
    ///
    /// An empty series yields the degenerate `{0, 0}` range.
    pub fn y_bounds(&self) -> AxisRange {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for &y in &self.ys {
            if y < min {
                min = y;
            }
            if y > max {
                max = y;
            }
        }
        if min <= max {
            AxisRange { min, max }
        } else {
            AxisRange { min: 0.0, max: 0.0 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_endpoints_exactly() {
        let xs = linspace(0.0, 1.0, 3);
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn linspace_is_monotonically_non_decreasing() {
        let xs = linspace(-2.5, 7.25, SAMPLE_COUNT);
        assert_eq!(xs.len(), SAMPLE_COUNT);
        assert_eq!(xs[0], -2.5);
        assert_eq!(xs[SAMPLE_COUNT - 1], 7.25);
        for w in xs.windows(2) {
            assert!(w[1] >= w[0], "xs must not decrease: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn from_fn_keeps_lengths_equal() {
        let s = SampleSeries::from_fn(0.0, 10.0, 17, |x| x * 2.0);
        assert_eq!(s.len(), 17);
        assert_eq!(s.xs().len(), s.ys().len());
        assert_eq!(s.points().len(), 17);
    }

    #[test]
    fn y_bounds_scans_min_and_max() {
        let s = SampleSeries::from_fn(0.0, 4.0, 5, |x| (x - 2.0) * (x - 2.0));
        let b = s.y_bounds();
        assert_eq!(b.min, 0.0);
        assert_eq!(b.max, 4.0);
    }

    #[test]
    fn y_bounds_of_constant_series_is_degenerate() {
        let s = SampleSeries::from_fn(0.0, 1.0, 8, |_| 3.5);
        let b = s.y_bounds();
        assert_eq!(b.min, 3.5);
        assert_eq!(b.max, 3.5);
        assert_eq!(b.span(), 0.0);
    }

    #[test]
    fn y_bounds_of_empty_series_is_zero_zero() {
        let s = SampleSeries::from_fn(0.0, 1.0, 0, |x| x);
        assert_eq!(s.y_bounds(), AxisRange::new(0.0, 0.0));
        assert!(s.is_empty());
    }
}
