//! Decoded market-data response types

use serde::{Deserialize, Serialize};

/// One `[timestampMs, value]` pair of a market series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct SeriesPoint {
    pub timestamp_ms: i64,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }
}

impl From<(f64, f64)> for SeriesPoint {
    fn from((timestamp_ms, value): (f64, f64)) -> Self {
        Self {
            timestamp_ms: timestamp_ms as i64,
            value,
        }
    }
}

impl From<SeriesPoint> for (f64, f64) {
    fn from(point: SeriesPoint) -> Self {
        (point.timestamp_ms as f64, point.value)
    }
}

/// Body of a `market_chart` response.
///
/// `prices` and `total_volumes` are independent series; their lengths are
/// not reconciled. Any other fields in the response are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<SeriesPoint>,
    #[serde(default)]
    pub total_volumes: Vec<SeriesPoint>,
}

impl MarketChart {
    pub fn new(prices: Vec<SeriesPoint>, total_volumes: Vec<SeriesPoint>) -> Self {
        Self {
            prices,
            total_volumes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.total_volumes.is_empty()
    }

    /// Earliest and latest timestamp over both series.
    pub fn time_bounds(&self) -> Option<(i64, i64)> {
        self.prices
            .iter()
            .chain(self.total_volumes.iter())
            .map(|point| point.timestamp_ms)
            .fold(None, |bounds, ts| match bounds {
                None => Some((ts, ts)),
                Some((min, max)) => Some((min.min(ts), max.max(ts))),
            })
    }

    /// Min and max of the price values, ignoring non-finite entries.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        value_bounds(&self.prices)
    }

    pub fn volume_bounds(&self) -> Option<(f64, f64)> {
        value_bounds(&self.total_volumes)
    }
}

fn value_bounds(series: &[SeriesPoint]) -> Option<(f64, f64)> {
    series
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(None, |bounds, value| match bounds {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_market_chart_response() {
        let body = r#"{
            "prices": [[1700000000000, 35000.5], [1700003600000, 35100.25]],
            "market_caps": [[1700000000000, 1.0]],
            "total_volumes": [[1700000000000, 1200000.0]]
        }"#;

        let chart: MarketChart = serde_json::from_str(body).unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[1], SeriesPoint::new(1_700_003_600_000, 35100.25));
        assert_eq!(chart.total_volumes.len(), 1);
    }

    #[test]
    fn test_missing_series_decode_empty() {
        let chart: MarketChart = serde_json::from_str("{}").unwrap();
        assert!(chart.is_empty());
        assert_eq!(chart.time_bounds(), None);
        assert_eq!(chart.price_bounds(), None);
    }

    #[test]
    fn test_bounds_span_both_series() {
        let chart = MarketChart::new(
            vec![SeriesPoint::new(2_000, 10.0), SeriesPoint::new(3_000, 7.5)],
            vec![SeriesPoint::new(1_000, 4.0), SeriesPoint::new(2_500, 9.0)],
        );
        assert_eq!(chart.time_bounds(), Some((1_000, 3_000)));
        assert_eq!(chart.price_bounds(), Some((7.5, 10.0)));
        assert_eq!(chart.volume_bounds(), Some((4.0, 9.0)));
    }
}
