//! Quote header text

use price_chart_config::ThemeConfig;
use price_chart_shared::format::{format_fixed2, format_grouped};
use price_chart_shared::DerivedQuote;
use serde::Serialize;

/// Fraction digits kept by the grouped number format.
const MAX_FRACTION_DIGITS: usize = 3;

/// Text and colour for the price header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    /// Grouped current price, e.g. `67,234.5`
    pub price_text: String,
    pub currency: String,
    /// e.g. `+$1,234.5 (1.87%)`
    pub change_text: String,
    pub change_color: String,
    pub is_gain: bool,
}

impl HeaderView {
    pub fn new(quote: &DerivedQuote, vs_currency: &str, theme: &ThemeConfig) -> Self {
        let is_gain = quote.is_gain();
        let sign = if is_gain { '+' } else { '-' };
        let change_text = format!(
            "{sign}${} ({}%)",
            format_grouped(quote.price_change.abs(), MAX_FRACTION_DIGITS),
            format_fixed2(quote.percentage_change)
        );

        Self {
            price_text: format_grouped(quote.current_price, MAX_FRACTION_DIGITS),
            currency: vs_currency.to_uppercase(),
            change_text,
            change_color: if is_gain {
                theme.gain_color.clone()
            } else {
                theme.loss_color.clone()
            },
            is_gain,
        }
    }
}
