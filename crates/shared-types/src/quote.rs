//! Quote values derived from the two most recent price points

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use tsify::Tsify;

use crate::SeriesPoint;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "camelCase")]
pub struct DerivedQuote {
    /// Last price in the series.
    pub current_price: f64,
    /// Last price minus the one before it.
    pub price_change: f64,
    /// `price_change` as a percentage of the previous price; 0 when the
    /// previous price is 0, so the header never shows `NaN` or `Infinity`.
    pub percentage_change: f64,
}

impl DerivedQuote {
    /// Compute the quote from a chronological price series.
    ///
    /// Fewer than two points yields the zero quote. A zero previous price
    /// leaves `percentage_change` at 0.
    pub fn from_prices(prices: &[SeriesPoint]) -> Self {
        let [.., previous, latest] = prices else {
            return Self::default();
        };

        let price_change = latest.value - previous.value;
        let percentage_change = if previous.value != 0.0 {
            price_change / previous.value * 100.0
        } else {
            0.0
        };

        Self {
            current_price: latest.value,
            price_change,
            percentage_change,
        }
    }

    pub fn is_gain(&self) -> bool {
        self.price_change >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<SeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| SeriesPoint::new(i as i64 * 60_000, *v))
            .collect()
    }

    #[test]
    fn test_quote_uses_last_two_points() {
        let quote = DerivedQuote::from_prices(&series(&[90.0, 100.0, 110.0]));
        assert_eq!(quote.current_price, 110.0);
        assert_eq!(quote.price_change, 10.0);
        assert!((quote.percentage_change - 10.0).abs() < 1e-9);
        assert!(quote.is_gain());
    }

    #[test]
    fn test_quote_negative_change() {
        let quote = DerivedQuote::from_prices(&series(&[200.0, 150.0]));
        assert_eq!(quote.price_change, -50.0);
        assert!((quote.percentage_change + 25.0).abs() < 1e-9);
        assert!(!quote.is_gain());
    }

    #[test]
    fn test_short_series_yield_zero_quote() {
        assert_eq!(DerivedQuote::from_prices(&[]), DerivedQuote::default());
        assert_eq!(
            DerivedQuote::from_prices(&series(&[42.0])),
            DerivedQuote::default()
        );
    }

    #[test]
    fn test_zero_previous_price_keeps_percentage_finite() {
        let quote = DerivedQuote::from_prices(&series(&[0.0, 5.0]));
        assert_eq!(quote.price_change, 5.0);
        assert_eq!(quote.percentage_change, 0.0);
    }
}
