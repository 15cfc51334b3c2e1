//! Layered chart renderer
//!
//! Holds the drawables in priority order and draws them in one pass over a
//! [`ChartSurface`]. The renderer owns the layout; callers only supply the
//! data snapshot and the pointer position.

use chrono::FixedOffset;
use price_chart_config::{ChartConfig, LayoutConfig, ThemeConfig};
use price_chart_shared::{DerivedQuote, MarketChart, PhysicalPosition};

use crate::drawables::{default_drawables, Drawable};
use crate::frame::Frame;
use crate::hover::HoverPoint;
use crate::layout::ChartLayout;
use crate::surface::ChartSurface;
use crate::time_axis::{offset_from_minutes_west, utc};

/// What a draw produced, for callers that mirror it into the DOM or tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSummary {
    pub time_labels: Vec<String>,
    pub hover: Option<HoverPoint>,
    pub layers_drawn: usize,
}

pub struct ChartRenderer {
    drawables: Vec<Box<dyn Drawable>>,
    theme: ThemeConfig,
    settings: LayoutConfig,
    layout: ChartLayout,
    utc_offset: FixedOffset,
}

impl ChartRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        let mut renderer = Self::empty(config.theme.clone(), config.layout.clone());
        for drawable in default_drawables() {
            renderer.add_drawable(drawable);
        }
        renderer
    }

    /// A renderer with no layers.
    pub fn empty(theme: ThemeConfig, settings: LayoutConfig) -> Self {
        let layout = ChartLayout::new(&settings);
        Self {
            drawables: Vec::new(),
            theme,
            settings,
            layout,
            utc_offset: utc(),
        }
    }

    pub fn add_drawable(&mut self, drawable: Box<dyn Drawable>) {
        log::debug!("ChartRenderer: Adding drawable '{}'", drawable.name());
        self.drawables.push(drawable);
        self.drawables.sort_by_key(|d| d.priority());
    }

    pub fn clear_drawables(&mut self) {
        self.drawables.clear();
    }

    pub fn drawable_names(&self) -> Vec<&str> {
        self.drawables.iter().map(|d| d.name()).collect()
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Use the viewer's zone for day ticks and dates, given as a
    /// `Date.getTimezoneOffset()` value. Out-of-range values fall back to UTC.
    pub fn set_timezone_offset_minutes(&mut self, minutes_west: i32) {
        self.utc_offset = offset_from_minutes_west(minutes_west);
        log::debug!("ChartRenderer: Dates shown at UTC{}", self.utc_offset);
    }

    /// Re-lay out for a new canvas size.
    pub fn resize(&mut self, width: f64, container_height: f64) {
        self.layout = ChartLayout::with_size(&self.settings, width, container_height);
        log::debug!(
            "ChartRenderer: Resized to {}x{}",
            self.layout.width,
            self.layout.height
        );
    }

    /// Resolve the hovered price point without drawing.
    pub fn hover_at(&self, chart: &MarketChart, position: PhysicalPosition) -> Option<HoverPoint> {
        Frame::new(
            chart,
            DerivedQuote::default(),
            &self.theme,
            &self.settings,
            &self.layout,
            Some((position.x, position.y)),
            self.utc_offset,
        )
        .hover
    }

    /// Clear `surface` and draw every layer.
    pub fn render(
        &self,
        surface: &mut dyn ChartSurface,
        chart: &MarketChart,
        quote: DerivedQuote,
        pointer: Option<PhysicalPosition>,
    ) -> RenderSummary {
        let frame = Frame::new(
            chart,
            quote,
            &self.theme,
            &self.settings,
            &self.layout,
            pointer.map(|p| (p.x, p.y)),
            self.utc_offset,
        );

        surface.clear();
        for drawable in &self.drawables {
            log::trace!("ChartRenderer: Drawing '{}'", drawable.name());
            drawable.draw(surface, &frame);
        }

        RenderSummary {
            time_labels: frame.time_labels().into_iter().map(|(_, l)| l).collect(),
            hover: frame.hover,
            layers_drawn: self.drawables.len(),
        }
    }
}
