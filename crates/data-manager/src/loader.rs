use std::cell::RefCell;

use price_chart_shared::{ChartResult, MarketChart, TimeRange};

use crate::data_store::ChartStore;
use crate::source::{MarketDataSource, MarketEndpoint};

/// Issues one market-chart request per load. No retry, no caching.
pub struct DataLoader<S> {
    endpoint: MarketEndpoint,
    source: S,
}

impl<S: MarketDataSource> DataLoader<S> {
    pub fn new(endpoint: MarketEndpoint, source: S) -> Self {
        Self { endpoint, source }
    }

    pub fn endpoint(&self) -> &MarketEndpoint {
        &self.endpoint
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn load(&self, range: TimeRange) -> ChartResult<MarketChart> {
        let url = self.endpoint.url(range.days());
        log::info!(
            "Fetching {} market chart for range {} ({} days)",
            self.endpoint.coin_id(),
            range,
            range.days()
        );

        let chart = self.source.fetch_market_chart(url.as_str()).await?;
        log::debug!(
            "Received {} prices and {} volumes",
            chart.prices.len(),
            chart.total_volumes.len()
        );
        Ok(chart)
    }

    /// Load `range` and apply the outcome to `store`.
    ///
    /// The store is only borrowed after the request settles, so concurrent
    /// loads apply in completion order.
    pub async fn load_into(&self, store: &RefCell<ChartStore>, range: TimeRange) -> bool {
        let result = self.load(range).await;
        store.borrow_mut().apply(result)
    }
}
