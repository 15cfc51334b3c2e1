use super::{draw_value_label, Drawable};
use crate::frame::Frame;
use crate::surface::ChartSurface;

/// Badge with the latest price, drawn over everything else.
pub struct CurrentPriceRenderer;

impl Drawable for CurrentPriceRenderer {
    fn draw(&self, surface: &mut dyn ChartSurface, frame: &Frame) {
        let y = frame.price_scale.pixel_for(frame.quote.current_price);

        surface.save();
        draw_value_label(
            surface,
            frame,
            y,
            &frame.theme.current_price_fill,
            frame.quote.current_price,
        );
        surface.restore();
    }

    fn name(&self) -> &str {
        "current_price"
    }

    fn priority(&self) -> u32 {
        200
    }
}
