//! Layers drawn onto the chart surface, lowest priority first

pub mod crosshair;
pub mod current_price;
pub mod grid;
pub mod price_line;
pub mod time_labels;
pub mod tooltip;
pub mod volume_bars;

pub use crosshair::CrosshairRenderer;
pub use current_price::CurrentPriceRenderer;
pub use grid::GridRenderer;
pub use price_line::PriceLineRenderer;
pub use time_labels::TimeLabelsRenderer;
pub use tooltip::TooltipRenderer;
pub use volume_bars::VolumeBarsRenderer;

use price_chart_shared::format::format_usd;

use crate::frame::Frame;
use crate::surface::{ChartSurface, Paint, TextStyle};

/// A layer of the chart.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn ChartSurface, frame: &Frame);

    /// Get the name of this drawable (for debugging)
    fn name(&self) -> &str;

    /// Draw order, lower first
    fn priority(&self) -> u32 {
        100
    }
}

/// The widget's layers in draw order.
pub fn default_drawables() -> Vec<Box<dyn Drawable>> {
    vec![
        Box::new(GridRenderer),
        Box::new(PriceLineRenderer),
        Box::new(VolumeBarsRenderer),
        Box::new(TimeLabelsRenderer),
        Box::new(CrosshairRenderer),
        Box::new(TooltipRenderer),
        Box::new(CurrentPriceRenderer),
    ]
}

/// Rounded box right of the price plot showing `$value` centred at `y`.
pub(crate) fn draw_value_label(
    surface: &mut dyn ChartSurface,
    frame: &Frame,
    y: f64,
    fill: &str,
    value: f64,
) {
    let layout = frame.layout;
    surface.set_fill(&Paint::solid(fill));
    surface.begin_path();
    surface.rounded_rect(
        layout.label_box_x(),
        y - layout.label_box_height / 2.0,
        layout.label_box_width,
        layout.label_box_height,
        layout.label_box_radius,
    );
    surface.fill();
    surface.fill_text(
        &format_usd(value),
        layout.label_text_x(),
        y,
        &TextStyle::centered(&frame.theme.font, &frame.theme.label_text_color),
    );
}
