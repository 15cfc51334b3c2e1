use super::Drawable;
use crate::frame::Frame;
use crate::surface::{ChartSurface, TextStyle};

/// Date labels under the volume bars.
pub struct TimeLabelsRenderer;

impl Drawable for TimeLabelsRenderer {
    fn draw(&self, surface: &mut dyn ChartSurface, frame: &Frame) {
        let labels = frame.time_labels();
        if labels.is_empty() {
            return;
        }

        let style = TextStyle::centered(&frame.theme.font, &frame.theme.axis_text_color);
        for (x, label) in &labels {
            surface.fill_text(label, *x, frame.layout.time_axis_y, &style);
        }
    }

    fn name(&self) -> &str {
        "time_labels"
    }

    fn priority(&self) -> u32 {
        40
    }
}
