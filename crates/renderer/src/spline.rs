//! Smoothed polyline through data points
//!
//! Control points follow the usual cardinal-spline construction: each
//! interior point gets two control points on a line parallel to the chord
//! between its neighbours, pulled in proportionally to the distance to each
//! neighbour and scaled by `tension`.

use crate::layout::ChartArea;

pub type Point = (f64, f64);

/// A point with the incoming and outgoing bezier control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplinePoint {
    pub point: Point,
    pub control_in: Point,
    pub control_out: Point,
}

fn distance(a: Point, b: Point) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

fn control_points(previous: Point, current: Point, next: Point, tension: f64) -> (Point, Point) {
    let d01 = distance(previous, current);
    let d12 = distance(current, next);
    let total = d01 + d12;

    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };

    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.0 - previous.0;
    let dy = next.1 - previous.1;

    (
        (current.0 - fa * dx, current.1 - fa * dy),
        (current.0 + fb * dx, current.1 + fb * dy),
    )
}

fn clamp_into(point: Point, area: &ChartArea) -> Point {
    (
        point.0.clamp(area.left, area.right.max(area.left)),
        point.1.clamp(area.top, area.bottom.max(area.top)),
    )
}

/// Compute control points for `points`, keeping them inside `area` so the
/// curve never overshoots the plot.
pub fn spline(points: &[Point], tension: f64, area: &ChartArea) -> Vec<SplinePoint> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let current = points[i];
            let previous = if i == 0 { current } else { points[i - 1] };
            let next = if i + 1 == n { current } else { points[i + 1] };
            let (control_in, control_out) = control_points(previous, current, next, tension);
            SplinePoint {
                point: current,
                control_in: clamp_into(control_in, area),
                control_out: clamp_into(control_out, area),
            }
        })
        .collect()
}
