//! Native market-data client built on reqwest

use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use price_chart_shared::{ChartError, ChartResult, MarketChart};

use crate::source::MarketDataSource;

pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> ChartResult<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> ChartResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("price-chart/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ChartError::Network {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    async fn get_market_chart(&self, url: &str) -> ChartResult<MarketChart> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ChartError::Network {
                message: format!("{e} (URL: {url})"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| ChartError::Network {
            message: format!("Failed to read body: {e} (URL: {url})"),
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}

impl MarketDataSource for HttpClient {
    fn fetch_market_chart<'a>(
        &'a self,
        url: &'a str,
    ) -> LocalBoxFuture<'a, ChartResult<MarketChart>> {
        self.get_market_chart(url).boxed_local()
    }
}
