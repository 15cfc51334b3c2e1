use super::{draw_value_label, Drawable};
use crate::frame::Frame;
use crate::surface::ChartSurface;

/// Guide lines through the hovered point and its price label.
pub struct CrosshairRenderer;

impl Drawable for CrosshairRenderer {
    fn draw(&self, surface: &mut dyn ChartSurface, frame: &Frame) {
        let Some(hover) = frame.hover else {
            return;
        };
        let price_area = frame.layout.price_area;
        let bottom = price_area.bottom.max(frame.layout.volume_area.bottom);

        surface.save();
        surface.set_stroke(&frame.theme.crosshair_color, 1.0);

        surface.begin_path();
        surface.move_to(hover.x, price_area.top);
        surface.line_to(hover.x, bottom);
        surface.stroke();

        surface.begin_path();
        surface.move_to(price_area.left, hover.y);
        surface.line_to(price_area.right, hover.y);
        surface.stroke();

        draw_value_label(
            surface,
            frame,
            hover.y,
            &frame.theme.crosshair_label_fill,
            hover.price,
        );
        surface.restore();
    }

    fn name(&self) -> &str {
        "crosshair"
    }

    fn priority(&self) -> u32 {
        50
    }
}
