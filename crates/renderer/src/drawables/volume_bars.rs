use super::Drawable;
use crate::frame::Frame;
use crate::surface::{ChartSurface, Paint};

/// Thin volume bars anchored at zero along the bottom panel.
pub struct VolumeBarsRenderer;

impl Drawable for VolumeBarsRenderer {
    fn draw(&self, surface: &mut dyn ChartSurface, frame: &Frame) {
        let Some(time_scale) = frame.time_scale else {
            return;
        };
        if frame.volumes().is_empty() {
            return;
        }

        let thickness = frame.settings.bar_thickness;
        let base = frame.volume_scale.pixel_for(0.0);

        surface.save();
        surface.set_fill(&Paint::solid(frame.theme.volume_color.as_str()));
        for point in frame.volumes().iter().filter(|p| p.value.is_finite()) {
            let x = time_scale.pixel_for(point.timestamp_ms);
            let top = frame.volume_scale.pixel_for(point.value);
            surface.fill_rect(x - thickness / 2.0, top.min(base), thickness, (base - top).abs());
        }
        surface.restore();
    }

    fn name(&self) -> &str {
        "volume_bars"
    }

    fn priority(&self) -> u32 {
        30
    }
}
