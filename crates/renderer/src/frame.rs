//! Per-draw snapshot handed to every drawable

use chrono::FixedOffset;
use price_chart_config::{LayoutConfig, ThemeConfig};
use price_chart_shared::{DerivedQuote, MarketChart, SeriesPoint};

use crate::hover::{resolve_hover, HoverPoint};
use crate::layout::ChartLayout;
use crate::scales::{LinearScale, TimeScale};
use crate::time_axis::{day_ticks, tick_label};

pub struct Frame<'a> {
    pub chart: &'a MarketChart,
    pub quote: DerivedQuote,
    pub theme: &'a ThemeConfig,
    pub settings: &'a LayoutConfig,
    pub layout: &'a ChartLayout,
    /// Shared by both panels; `None` when neither series has points.
    pub time_scale: Option<TimeScale>,
    pub price_scale: LinearScale,
    pub volume_scale: LinearScale,
    pub hover: Option<HoverPoint>,
    /// Zone used for day boundaries and date text.
    pub utc_offset: FixedOffset,
}

impl<'a> Frame<'a> {
    pub fn new(
        chart: &'a MarketChart,
        quote: DerivedQuote,
        theme: &'a ThemeConfig,
        settings: &'a LayoutConfig,
        layout: &'a ChartLayout,
        pointer: Option<(f64, f64)>,
        utc_offset: FixedOffset,
    ) -> Self {
        let time_scale = chart
            .time_bounds()
            .map(|bounds| TimeScale::new(bounds, &layout.price_area));
        let price_scale = LinearScale::nice(chart.price_bounds(), &layout.price_area);
        let volume_scale = LinearScale::from_zero(chart.volume_bounds(), &layout.volume_area);

        let hover = match (pointer, time_scale.as_ref()) {
            (Some(position), Some(time_scale)) => resolve_hover(
                position,
                &layout.hover_area(),
                &chart.prices,
                time_scale,
                &price_scale,
            ),
            _ => None,
        };

        Self {
            chart,
            quote,
            theme,
            settings,
            layout,
            time_scale,
            price_scale,
            volume_scale,
            hover,
            utc_offset,
        }
    }

    pub fn prices(&self) -> &'a [SeriesPoint] {
        &self.chart.prices
    }

    pub fn volumes(&self) -> &'a [SeriesPoint] {
        &self.chart.total_volumes
    }

    /// Day ticks across the time domain, at most `max_ticks`.
    pub fn ticks(&self, max_ticks: usize) -> Vec<i64> {
        match self.time_scale {
            Some(scale) => {
                let (min, max) = scale.bounds();
                day_ticks(min, max, max_ticks, self.utc_offset)
            }
            None => Vec::new(),
        }
    }

    /// Labels shown under the volume bars. Empty without price data.
    pub fn time_labels(&self) -> Vec<(f64, String)> {
        let Some(scale) = self.time_scale else {
            return Vec::new();
        };
        if self.chart.prices.is_empty() {
            return Vec::new();
        }
        self.ticks(self.settings.max_time_ticks)
            .into_iter()
            .map(|ts| (scale.pixel_for(ts), tick_label(ts, self.utc_offset)))
            .collect()
    }
}
