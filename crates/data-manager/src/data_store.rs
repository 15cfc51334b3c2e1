use price_chart_shared::{
    ChartResult, DerivedQuote, MarketChart, MenuTab, SeriesPoint, TimeRange, UiState,
};

/// The snapshot the widget displays plus its UI toggles.
///
/// Series and quote are replaced together on every successful load and left
/// untouched by a failed one.
#[derive(Debug, Clone, Default)]
pub struct ChartStore {
    chart: MarketChart,
    quote: DerivedQuote,
    ui: UiState,
    mounted: bool,
    dirty: bool,
}

impl ChartStore {
    pub fn new(initial_range: TimeRange) -> Self {
        Self {
            ui: UiState::new(initial_range),
            dirty: true,
            ..Default::default()
        }
    }

    /// Returns the range to fetch on first mount, `None` afterwards.
    pub fn mount(&mut self) -> Option<TimeRange> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.ui.time_range)
    }

    /// Select a range; returns it when the selection changed and a fetch is due.
    pub fn select_range(&mut self, range: TimeRange) -> Option<TimeRange> {
        let new_state = UiState {
            time_range: range,
            ..self.ui
        };
        let detection = self.ui.detect_changes(&new_state);
        self.ui = new_state;

        if detection.requires_data_fetch {
            log::debug!("{}", detection.change_summary.join("; "));
            self.dirty = true;
            Some(range)
        } else {
            None
        }
    }

    /// Returns whether the highlighted tab changed.
    pub fn select_tab(&mut self, tab: MenuTab) -> bool {
        let changed = self.ui.menu_tab != tab;
        self.ui.menu_tab = tab;
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Record the browser's fullscreen state after a `fullscreenchange`.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        let changed = self.ui.fullscreen != fullscreen;
        self.ui.fullscreen = fullscreen;
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Apply the outcome of a load. Failures are logged and keep the
    /// previous snapshot on screen.
    pub fn apply(&mut self, result: ChartResult<MarketChart>) -> bool {
        match result {
            Ok(chart) => {
                self.replace(chart);
                true
            }
            Err(e) => {
                log::error!("Error fetching price data: {e}");
                false
            }
        }
    }

    pub fn replace(&mut self, chart: MarketChart) {
        self.quote = DerivedQuote::from_prices(&chart.prices);
        log::debug!(
            "Chart data replaced: {} prices, {} volumes, current price {}",
            chart.prices.len(),
            chart.total_volumes.len(),
            self.quote.current_price
        );
        self.chart = chart;
        self.dirty = true;
    }

    pub fn chart(&self) -> &MarketChart {
        &self.chart
    }

    pub fn prices(&self) -> &[SeriesPoint] {
        &self.chart.prices
    }

    pub fn volumes(&self) -> &[SeriesPoint] {
        &self.chart.total_volumes
    }

    pub fn quote(&self) -> DerivedQuote {
        self.quote
    }

    pub fn ui(&self) -> UiState {
        self.ui
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use price_chart_shared::ChartError;

    fn chart(prices: &[f64]) -> MarketChart {
        let points: Vec<SeriesPoint> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| SeriesPoint::new(i as i64 * 3_600_000, *p))
            .collect();
        MarketChart::new(points.clone(), points)
    }

    #[test]
    fn test_mount_requests_initial_range_once() {
        let mut store = ChartStore::new(TimeRange::OneWeek);
        assert_eq!(store.mount(), Some(TimeRange::OneWeek));
        assert_eq!(store.mount(), None);
        assert!(store.is_mounted());
    }

    #[test]
    fn test_select_range_only_fetches_on_change() {
        let mut store = ChartStore::new(TimeRange::OneWeek);
        assert_eq!(store.select_range(TimeRange::OneWeek), None);
        assert_eq!(store.select_range(TimeRange::OneYear), Some(TimeRange::OneYear));
        assert_eq!(store.ui().time_range, TimeRange::OneYear);
        assert_eq!(store.select_range(TimeRange::OneYear), None);
    }

    #[test]
    fn test_apply_success_replaces_snapshot() {
        let mut store = ChartStore::new(TimeRange::OneDay);
        assert!(store.apply(Ok(chart(&[100.0, 120.0]))));
        assert_eq!(store.prices().len(), 2);
        assert_eq!(store.quote().current_price, 120.0);
        assert_eq!(store.quote().price_change, 20.0);

        assert!(store.apply(Ok(chart(&[5.0]))));
        assert_eq!(store.prices().len(), 1);
        assert_eq!(store.quote(), DerivedQuote::default());
    }

    #[test]
    fn test_apply_failure_keeps_previous_snapshot() {
        let mut store = ChartStore::new(TimeRange::OneDay);
        store.apply(Ok(chart(&[100.0, 110.0])));
        let before = store.chart().clone();
        let quote = store.quote();

        let applied = store.apply(Err(ChartError::Network {
            message: "offline".to_string(),
        }));

        assert!(!applied);
        assert_eq!(store.chart(), &before);
        assert_eq!(store.quote(), quote);
    }

    #[test]
    fn test_tab_and_fullscreen_do_not_touch_data() {
        let mut store = ChartStore::new(TimeRange::OneDay);
        store.apply(Ok(chart(&[1.0, 2.0])));
        store.mark_clean();

        assert!(store.select_tab(MenuTab::Settings));
        assert!(!store.select_tab(MenuTab::Settings));
        assert!(store.set_fullscreen(true));
        assert!(store.is_dirty());
        assert_eq!(store.prices().len(), 2);
        assert_eq!(store.ui().time_range, TimeRange::OneDay);
    }
}
