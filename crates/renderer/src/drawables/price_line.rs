use super::Drawable;
use crate::frame::Frame;
use crate::spline::{spline, Point, SplinePoint};
use crate::surface::{ChartSurface, Paint};

/// Smoothed price line with a gradient fill down to the plot floor.
pub struct PriceLineRenderer;

fn trace(surface: &mut dyn ChartSurface, curve: &[SplinePoint]) {
    let Some(first) = curve.first() else {
        return;
    };
    surface.move_to(first.point.0, first.point.1);
    for pair in curve.windows(2) {
        surface.bezier_curve_to(pair[0].control_out, pair[1].control_in, pair[1].point);
    }
}

impl Drawable for PriceLineRenderer {
    fn draw(&self, surface: &mut dyn ChartSurface, frame: &Frame) {
        let Some(time_scale) = frame.time_scale else {
            return;
        };

        let points: Vec<Point> = frame
            .prices()
            .iter()
            .filter(|p| p.value.is_finite())
            .map(|p| {
                (
                    time_scale.pixel_for(p.timestamp_ms),
                    frame.price_scale.pixel_for(p.value),
                )
            })
            .collect();
        let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) else {
            return;
        };

        let area = frame.layout.price_area;
        let curve = spline(&points, frame.settings.line_tension, &area);
        let theme = frame.theme;

        surface.save();

        surface.begin_path();
        trace(surface, &curve);
        surface.line_to(last.0, area.bottom);
        surface.line_to(first.0, area.bottom);
        surface.close_path();
        surface.set_fill(&Paint::VerticalGradient {
            top: 0.0,
            bottom: theme.gradient_height,
            from: theme.gradient_top.clone(),
            to: theme.gradient_bottom.clone(),
        });
        surface.fill();

        surface.begin_path();
        trace(surface, &curve);
        surface.set_stroke(&theme.line_color, frame.settings.line_width);
        surface.stroke();

        surface.restore();
    }

    fn name(&self) -> &str {
        "price_line"
    }

    fn priority(&self) -> u32 {
        20
    }
}
