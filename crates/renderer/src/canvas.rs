//! Canvas2D backed surface for the browser build

use price_chart_shared::{ChartError, ChartResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::{ChartSurface, Paint, TextStyle};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    pixel_ratio: f64,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> ChartResult<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| ChartError::Render {
                message: "2d context unavailable".to_string(),
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::Render {
                message: "context is not a CanvasRenderingContext2d".to_string(),
            })?;

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        Ok(Self {
            canvas,
            ctx,
            width,
            height,
            pixel_ratio: 1.0,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Size the backing store for `pixel_ratio` and keep drawing in CSS pixels.
    pub fn resize(&mut self, width: f64, height: f64, pixel_ratio: f64) -> ChartResult<()> {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };

        self.canvas
            .set_width((width * pixel_ratio).round().max(1.0) as u32);
        self.canvas
            .set_height((height * pixel_ratio).round().max(1.0) as u32);

        let style = self.canvas.style();
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;

        self.ctx
            .set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)?;

        log::debug!("Canvas resized to {width}x{height} @{pixel_ratio}x");
        self.width = width;
        self.height = height;
        self.pixel_ratio = pixel_ratio;
        Ok(())
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }
}

fn warn_on_err(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("Canvas {op} failed: {e:?}");
    }
}

impl ChartSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_stroke(&mut self, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
    }

    fn set_fill(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(color),
            Paint::VerticalGradient {
                top,
                bottom,
                from,
                to,
            } => {
                let gradient = self.ctx.create_linear_gradient(0.0, *top, 0.0, *bottom);
                warn_on_err("gradient stop", gradient.add_color_stop(0.0, from));
                warn_on_err("gradient stop", gradient.add_color_stop(1.0, to));
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn bezier_curve_to(&mut self, cp1: (f64, f64), cp2: (f64, f64), to: (f64, f64)) {
        self.ctx
            .bezier_curve_to(cp1.0, cp1.1, cp2.0, cp2.1, to.0, to.1);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) {
        let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
        self.ctx.move_to(x + r, y);
        warn_on_err("arc_to", self.ctx.arc_to(x + width, y, x + width, y + height, r));
        warn_on_err("arc_to", self.ctx.arc_to(x + width, y + height, x, y + height, r));
        warn_on_err("arc_to", self.ctx.arc_to(x, y + height, x, y, r));
        warn_on_err("arc_to", self.ctx.arc_to(x, y, x + width, y, r));
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.ctx.set_font(&style.font);
        self.ctx.set_fill_style_str(&style.color);
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline(style.baseline.as_css());
        warn_on_err("fill_text", self.ctx.fill_text(text, x, y));
    }
}
