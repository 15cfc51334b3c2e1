//! Value to pixel mappings

use crate::layout::ChartArea;

/// Round `[min, max]` out to a step of 1, 2 or 5 times a power of ten.
///
/// Returns `(interval, start, end)`.
pub fn nice_bounds(min: f64, max: f64) -> (f64, f64, f64) {
    let range = max - min;
    if range <= 0.0 || !range.is_finite() {
        return (1.0, min.floor(), min.ceil() + 1.0);
    }

    let target_intervals = 5.0;
    let raw_interval = range / target_intervals;

    let exponent = raw_interval.log10().floor();
    let base = 10f64.powf(exponent);
    let fraction = raw_interval / base;

    let nice_fraction = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    let interval = nice_fraction * base;
    let start = (min / interval).floor() * interval;
    let end = (max / interval).ceil() * interval;

    (interval, start, end)
}

/// Maps epoch milliseconds onto the horizontal extent of a plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    min: i64,
    max: i64,
    left: f64,
    right: f64,
}

impl TimeScale {
    pub fn new((min, max): (i64, i64), area: &ChartArea) -> Self {
        Self {
            min,
            max,
            left: area.left,
            right: area.right,
        }
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    pub fn pixel_for(&self, timestamp_ms: i64) -> f64 {
        if self.max <= self.min {
            return (self.left + self.right) / 2.0;
        }
        let t = (timestamp_ms as f64 - self.min as f64) / self.span();
        self.left + t * (self.right - self.left)
    }

    pub fn value_for(&self, x: f64) -> i64 {
        if self.max <= self.min || self.right <= self.left {
            return self.min;
        }
        let t = ((x - self.left) / (self.right - self.left)).clamp(0.0, 1.0);
        // Saturating casts keep the result inside `[min, max]`.
        let value = self.min as f64 + (t * self.span()).round();
        value.clamp(self.min as f64, self.max as f64) as i64
    }

    /// Width of the domain in f64 so extreme bounds cannot overflow.
    fn span(&self) -> f64 {
        self.max as f64 - self.min as f64
    }
}

/// Maps values onto the vertical extent of a plot, larger values upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
    top: f64,
    bottom: f64,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, area: &ChartArea) -> Self {
        Self {
            min,
            max,
            top: area.top,
            bottom: area.bottom,
        }
    }

    /// Scale over the nice bounds of `bounds`, or `[0, 1]` without data.
    pub fn nice(bounds: Option<(f64, f64)>, area: &ChartArea) -> Self {
        let (min, max) = bounds.unwrap_or((0.0, 1.0));
        let (_, start, end) = nice_bounds(min, max);
        Self::new(start, end, area)
    }

    /// Like [`LinearScale::nice`] but anchored at zero, for bar heights.
    pub fn from_zero(bounds: Option<(f64, f64)>, area: &ChartArea) -> Self {
        let (min, max) = bounds.unwrap_or((0.0, 1.0));
        let (_, start, end) = nice_bounds(min.min(0.0), max.max(0.0));
        Self::new(start, end, area)
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn pixel_for(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return self.bottom;
        }
        let t = (value - self.min) / (self.max - self.min);
        self.bottom - t * (self.bottom - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> ChartArea {
        ChartArea::new(0.0, 0.0, 100.0, 200.0)
    }

    #[test]
    fn test_basic_range() {
        let (interval, start, end) = nice_bounds(2.9, 7.1);
        assert_eq!(interval, 1.0);
        assert_eq!(start, 2.0);
        assert_eq!(end, 8.0);
    }

    #[test]
    fn test_price_range() {
        let (interval, start, end) = nice_bounds(61_234.0, 67_890.0);
        assert_eq!(interval, 2_000.0);
        assert_eq!(start, 60_000.0);
        assert_eq!(end, 68_000.0);
    }

    #[test]
    fn test_flat_range() {
        assert_eq!(nice_bounds(5.5, 5.5), (1.0, 5.0, 7.0));
    }

    #[test]
    fn test_time_scale_round_trips_pixels() {
        let scale = TimeScale::new((1_000, 2_000), &area());
        assert_eq!(scale.pixel_for(1_000), 0.0);
        assert_eq!(scale.pixel_for(1_500), 50.0);
        assert_eq!(scale.value_for(25.0), 1_250);

        let single = TimeScale::new((1_000, 1_000), &area());
        assert_eq!(single.pixel_for(1_000), 50.0);
    }

    #[test]
    fn test_time_scale_survives_extreme_bounds() {
        let scale = TimeScale::new((i64::MIN, i64::MAX), &area());
        assert_eq!(scale.pixel_for(i64::MIN), 0.0);
        assert_eq!(scale.pixel_for(i64::MAX), 100.0);
        assert_eq!(scale.value_for(0.0), i64::MIN);
        assert_eq!(scale.value_for(100.0), i64::MAX);
        assert_eq!(scale.value_for(500.0), i64::MAX);
    }

    #[test]
    fn test_linear_scale_is_inverted() {
        let scale = LinearScale::new(0.0, 10.0, &area());
        assert_eq!(scale.pixel_for(0.0), 200.0);
        assert_eq!(scale.pixel_for(10.0), 0.0);
        assert_eq!(scale.pixel_for(5.0), 100.0);
    }

    #[test]
    fn test_volume_scale_starts_at_zero() {
        let scale = LinearScale::from_zero(Some((3_000.0, 9_000.0)), &area());
        assert_eq!(scale.bounds().0, 0.0);
        assert_eq!(scale.pixel_for(0.0), 200.0);
    }

    #[test]
    fn test_empty_scale_defaults() {
        let scale = LinearScale::nice(None, &area());
        assert_eq!(scale.bounds(), (0.0, 1.0));
    }
}
