//! Shared types for the price chart widget
//!
//! This crate contains the types passed between the data loader, the
//! renderer and the wasm bridge: the decoded market response, the derived
//! quote, the UI selection enums and the common error type.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use tsify::Tsify;

pub mod data_types;
pub mod errors;
pub mod events;
pub mod format;
pub mod quote;
pub mod store_state;

pub use data_types::{MarketChart, SeriesPoint};
pub use errors::{ChartError, ChartResult, ErrorContext, ErrorResponse};
pub use events::{PhysicalPosition, PointerEvent};
pub use quote::DerivedQuote;
pub use store_state::{StateChangeDetection, UiState};

/// Preset lookback windows offered by the range buttons.
///
/// The order of [`TimeRange::ALL`] is significant: the day count sent to the
/// market endpoint is the 1-based position of the range in that list, so
/// `1w` requests 3 days and `max` requests 7.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub enum TimeRange {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[default]
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "max")]
    Max,
}

impl TimeRange {
    pub const ALL: [TimeRange; 7] = [
        TimeRange::OneDay,
        TimeRange::ThreeDays,
        TimeRange::OneWeek,
        TimeRange::OneMonth,
        TimeRange::SixMonths,
        TimeRange::OneYear,
        TimeRange::Max,
    ];

    /// Button label, also the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneDay => "1d",
            TimeRange::ThreeDays => "3d",
            TimeRange::OneWeek => "1w",
            TimeRange::OneMonth => "1m",
            TimeRange::SixMonths => "6m",
            TimeRange::OneYear => "1y",
            TimeRange::Max => "max",
        }
    }

    /// Day count requested from the market endpoint (position in `ALL`, 1-based).
    pub fn days(&self) -> u32 {
        Self::ALL
            .iter()
            .position(|range| range == self)
            .map(|index| index as u32 + 1)
            .unwrap_or(1)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.label() == label)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TimeRange {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ChartError::UnknownSelection {
            kind: "time range".to_string(),
            value: s.to_string(),
        })
    }
}

/// Header menu tabs. Selecting one only changes which tab is highlighted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub enum MenuTab {
    Summary,
    #[default]
    Chart,
    Statistics,
    Analysis,
    Settings,
}

impl MenuTab {
    pub const ALL: [MenuTab; 5] = [
        MenuTab::Summary,
        MenuTab::Chart,
        MenuTab::Statistics,
        MenuTab::Analysis,
        MenuTab::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuTab::Summary => "Summary",
            MenuTab::Chart => "Chart",
            MenuTab::Statistics => "Statistics",
            MenuTab::Analysis => "Analysis",
            MenuTab::Settings => "Settings",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.label() == label)
    }
}

impl std::fmt::Display for MenuTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for MenuTab {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ChartError::UnknownSelection {
            kind: "menu tab".to_string(),
            value: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_days_follow_list_position() {
        let days: Vec<u32> = TimeRange::ALL.iter().map(TimeRange::days).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(TimeRange::OneWeek.days(), 3);
    }

    #[test]
    fn test_range_labels_parse() {
        for range in TimeRange::ALL {
            assert_eq!(range.label().parse::<TimeRange>().unwrap(), range);
        }
        assert!("2w".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::default(), TimeRange::OneWeek);
    }

    #[test]
    fn test_range_serde_uses_labels() {
        let json = serde_json::to_string(&TimeRange::SixMonths).unwrap();
        assert_eq!(json, "\"6m\"");
        let back: TimeRange = serde_json::from_str("\"max\"").unwrap();
        assert_eq!(back, TimeRange::Max);
    }

    #[test]
    fn test_menu_tab_defaults_to_chart() {
        assert_eq!(MenuTab::default(), MenuTab::Chart);
        assert_eq!(MenuTab::from_label("Statistics"), Some(MenuTab::Statistics));
        assert!("Orders".parse::<MenuTab>().is_err());
    }
}
