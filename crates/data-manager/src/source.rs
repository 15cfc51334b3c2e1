//! Market endpoint addressing and the fetch seam

use futures::future::LocalBoxFuture;
use price_chart_config::ApiConfig;
use price_chart_shared::{ChartError, ChartResult, MarketChart};
use url::Url;

/// Anything that can GET a `market_chart` URL and decode the body.
///
/// Futures are local: in the browser they are driven by `spawn_local` and
/// hold JS values that are not `Send`.
pub trait MarketDataSource {
    fn fetch_market_chart<'a>(&'a self, url: &'a str)
        -> LocalBoxFuture<'a, ChartResult<MarketChart>>;
}

impl<T: MarketDataSource + ?Sized> MarketDataSource for Box<T> {
    fn fetch_market_chart<'a>(
        &'a self,
        url: &'a str,
    ) -> LocalBoxFuture<'a, ChartResult<MarketChart>> {
        (**self).fetch_market_chart(url)
    }
}

/// `{base}/coins/{coin_id}/market_chart?vs_currency={currency}&days={N}`
#[derive(Debug, Clone, PartialEq)]
pub struct MarketEndpoint {
    base: Url,
    coin_id: String,
    vs_currency: String,
}

impl MarketEndpoint {
    pub fn new(base_url: &str, coin_id: &str, vs_currency: &str) -> ChartResult<Self> {
        let base = Url::parse(base_url).map_err(|e| ChartError::InvalidConfig {
            message: format!("Invalid API base URL '{base_url}': {e}"),
            field: Some("api.baseUrl".to_string()),
        })?;

        if base.cannot_be_a_base() {
            return Err(ChartError::InvalidConfig {
                message: format!("API base URL '{base_url}' cannot carry a path"),
                field: Some("api.baseUrl".to_string()),
            });
        }

        Ok(Self {
            base,
            coin_id: coin_id.to_string(),
            vs_currency: vs_currency.to_string(),
        })
    }

    pub fn from_config(api: &ApiConfig) -> ChartResult<Self> {
        Self::new(&api.base_url, &api.coin_id, &api.vs_currency)
    }

    pub fn coin_id(&self) -> &str {
        &self.coin_id
    }

    pub fn vs_currency(&self) -> &str {
        &self.vs_currency
    }

    pub fn url(&self, days: u32) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["coins", self.coin_id.as_str(), "market_chart"]);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("vs_currency", &self.vs_currency)
            .append_pair("days", &days.to_string());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_url() {
        let endpoint = MarketEndpoint::new("https://api.coingecko.com/api/v3", "bitcoin", "usd")
            .unwrap();
        assert_eq!(
            endpoint.url(3).as_str(),
            "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=3"
        );
    }

    #[test]
    fn test_trailing_slash_and_encoding() {
        let endpoint = MarketEndpoint::new("http://localhost:8080/proxy/", "wrapped bitcoin", "usd")
            .unwrap();
        assert_eq!(
            endpoint.url(7).as_str(),
            "http://localhost:8080/proxy/coins/wrapped%20bitcoin/market_chart?vs_currency=usd&days=7"
        );
    }

    #[test]
    fn test_rejects_unusable_base() {
        assert!(MarketEndpoint::new("not a url", "bitcoin", "usd").is_err());
        assert!(MarketEndpoint::new("mailto:someone@example.com", "bitcoin", "usd").is_err());
    }

    #[test]
    fn test_from_config() {
        let endpoint = MarketEndpoint::from_config(&ApiConfig::default()).unwrap();
        assert_eq!(endpoint.coin_id(), "bitcoin");
        assert_eq!(endpoint.vs_currency(), "usd");
    }
}
