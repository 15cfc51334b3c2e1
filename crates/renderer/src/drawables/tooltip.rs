use price_chart_shared::format::format_usd;

use super::Drawable;
use crate::frame::Frame;
use crate::surface::{ChartSurface, Paint, TextAlign, TextBaseline, TextStyle};
use crate::time_axis::tooltip_title;

const PADDING: f64 = 6.0;
const LINE_HEIGHT: f64 = 16.0;
const CARET_GAP: f64 = 10.0;
// No text metrics on the surface; approximate for a 12px face.
const CHAR_WIDTH: f64 = 7.0;

/// Date and price box next to the hovered point.
pub struct TooltipRenderer;

impl Drawable for TooltipRenderer {
    fn draw(&self, surface: &mut dyn ChartSurface, frame: &Frame) {
        let Some(hover) = frame.hover else {
            return;
        };

        let title = tooltip_title(hover.timestamp_ms, frame.utc_offset);
        let body = format_usd(hover.price);
        let chars = title.chars().count().max(body.chars().count()) as f64;
        let width = chars * CHAR_WIDTH + 2.0 * PADDING;
        let height = 2.0 * LINE_HEIGHT + 2.0 * PADDING;

        let area = frame.layout.price_area;
        let x = if hover.x + CARET_GAP + width <= area.right {
            hover.x + CARET_GAP
        } else {
            hover.x - CARET_GAP - width
        };
        let y = (hover.y - height / 2.0).clamp(area.top, (area.bottom - height).max(area.top));

        surface.save();
        surface.set_fill(&Paint::solid(frame.theme.crosshair_label_fill.as_str()));
        surface.begin_path();
        surface.rounded_rect(x, y, width, height, frame.layout.label_box_radius);
        surface.fill();

        let mut style = TextStyle {
            font: format!("bold {}", frame.theme.font),
            color: frame.theme.label_text_color.clone(),
            align: TextAlign::Left,
            baseline: TextBaseline::Top,
        };
        surface.fill_text(&title, x + PADDING, y + PADDING, &style);
        style.font = frame.theme.font.clone();
        surface.fill_text(&body, x + PADDING, y + PADDING + LINE_HEIGHT, &style);
        surface.restore();
    }

    fn name(&self) -> &str {
        "tooltip"
    }

    fn priority(&self) -> u32 {
        60
    }
}
