use super::Drawable;
use crate::frame::Frame;
use crate::surface::ChartSurface;

/// Upper bound on vertical grid lines across the price plot.
pub const GRID_MAX_LINES: usize = 11;

/// Vertical day lines behind the price plot.
pub struct GridRenderer;

impl Drawable for GridRenderer {
    fn draw(&self, surface: &mut dyn ChartSurface, frame: &Frame) {
        let Some(scale) = frame.time_scale else {
            return;
        };
        let area = frame.layout.price_area;

        surface.save();
        surface.set_stroke(&frame.theme.grid_color, 1.0);
        surface.begin_path();
        for ts in frame.ticks(GRID_MAX_LINES) {
            let x = scale.pixel_for(ts);
            surface.move_to(x, area.top);
            surface.line_to(x, area.bottom);
        }
        surface.stroke();
        surface.restore();
    }

    fn name(&self) -> &str {
        "grid"
    }

    fn priority(&self) -> u32 {
        10
    }
}
