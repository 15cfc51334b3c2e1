//! Widget state machine: store, pointer, renderer and header in one place
//!
//! Nothing here touches the DOM, so the full interaction flow runs in
//! native tests against a [`RecordingSurface`](price_chart_renderer::RecordingSurface).

use price_chart_config::ChartConfig;
use price_chart_data::ChartStore;
use price_chart_renderer::{ChartRenderer, ChartSurface, RenderSummary};
use price_chart_shared::{
    ChartResult, DerivedQuote, MarketChart, MenuTab, PointerEvent, TimeRange, UiState,
};
use serde::Serialize;

use crate::controls::CanvasController;
use crate::header::HeaderView;

/// State handed to JavaScript by `FinancialChart::state`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub quote: DerivedQuote,
    pub ui: UiState,
    pub price_points: usize,
    pub volume_points: usize,
    pub time_labels: Vec<String>,
    pub hovered_price: Option<f64>,
}

pub struct ChartEngine {
    config: ChartConfig,
    store: ChartStore,
    renderer: ChartRenderer,
    canvas_controller: CanvasController,
    last_render: RenderSummary,
    canvas_size: (f64, f64),
}

impl ChartEngine {
    pub fn new(config: ChartConfig) -> Self {
        let renderer = ChartRenderer::new(&config);
        let canvas_size = (config.layout.width, config.layout.container_height);
        Self {
            store: ChartStore::new(config.default_range),
            renderer,
            canvas_controller: CanvasController::new(),
            last_render: RenderSummary::default(),
            canvas_size,
            config,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn store(&self) -> &ChartStore {
        &self.store
    }

    /// Show dates in the viewer's zone (`Date.getTimezoneOffset()` minutes).
    pub fn set_timezone_offset_minutes(&mut self, minutes_west: i32) {
        self.renderer.set_timezone_offset_minutes(minutes_west);
        self.store.mark_dirty();
    }

    /// Range to fetch on first mount, `None` afterwards.
    pub fn mount(&mut self) -> Option<TimeRange> {
        self.store.mount()
    }

    /// Select a range by its button label; returns the range to fetch if the
    /// selection changed.
    pub fn select_range(&mut self, label: &str) -> ChartResult<Option<TimeRange>> {
        let range: TimeRange = label.parse()?;
        Ok(self.store.select_range(range))
    }

    pub fn select_tab(&mut self, label: &str) -> ChartResult<bool> {
        let tab: MenuTab = label.parse()?;
        Ok(self.store.select_tab(tab))
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        self.store.set_fullscreen(fullscreen)
    }

    pub fn handle_cursor_event(&mut self, event: PointerEvent) -> bool {
        let changed = self.canvas_controller.handle_cursor_event(event);
        if changed {
            self.store.mark_dirty();
        }
        changed
    }

    /// Apply a finished load; failures keep the current snapshot.
    pub fn apply(&mut self, result: ChartResult<MarketChart>) -> bool {
        self.store.apply(result)
    }

    pub fn resized(&mut self, width: f64, height: f64) {
        if (width, height) == self.canvas_size {
            return;
        }
        log::info!("Resizing chart to: {width}x{height}");
        self.canvas_size = (width, height);
        self.renderer.resize(width, height);
        self.store.mark_dirty();
    }

    /// Logical canvas size after layout.
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.renderer.layout().width, self.renderer.layout().height)
    }

    /// Force the next redraw to repaint the canvas.
    pub fn invalidate(&mut self) {
        self.store.mark_dirty();
    }

    pub fn needs_render(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn render(&mut self, surface: &mut dyn ChartSurface) -> &RenderSummary {
        self.last_render = self.renderer.render(
            surface,
            self.store.chart(),
            self.store.quote(),
            self.canvas_controller.position(),
        );
        self.store.mark_clean();
        &self.last_render
    }

    pub fn last_render(&self) -> &RenderSummary {
        &self.last_render
    }

    pub fn header(&self) -> HeaderView {
        HeaderView::new(
            &self.store.quote(),
            &self.config.api.vs_currency,
            &self.config.theme,
        )
    }

    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            quote: self.store.quote(),
            ui: self.store.ui(),
            price_points: self.store.prices().len(),
            volume_points: self.store.volumes().len(),
            time_labels: self.last_render.time_labels.clone(),
            hovered_price: self.last_render.hover.map(|h| h.price),
        }
    }
}
