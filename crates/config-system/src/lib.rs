//! Configuration system for the price chart widget
//! Endpoint, palette and layout settings with JSON overrides

use price_chart_shared::{ChartResult, TimeRange};
use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::ConfigValidator;

/// Default market-data API root. Can be overridden at build time with
/// `MARKET_API_BASE_URL`.
pub const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Complete widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub api: ApiConfig,
    pub theme: ThemeConfig,
    pub layout: LayoutConfig,
    /// Range selected on mount
    pub default_range: TimeRange,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            theme: ThemeConfig::default(),
            layout: LayoutConfig::default(),
            default_range: TimeRange::OneWeek,
        }
    }
}

/// Market endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
    pub coin_id: String,
    pub vs_currency: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("MARKET_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            coin_id: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
        }
    }
}

/// CSS colour strings and fonts used by the renderer and the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub line_color: String,
    pub gradient_top: String,
    pub gradient_bottom: String,
    /// Pixel height over which the fill gradient fades
    pub gradient_height: f64,
    pub volume_color: String,
    pub grid_color: String,
    pub crosshair_color: String,
    pub crosshair_label_fill: String,
    pub current_price_fill: String,
    pub label_text_color: String,
    pub axis_text_color: String,
    pub font: String,
    pub gain_color: String,
    pub loss_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            line_color: "rgba(59, 130, 246, 1)".to_string(),
            gradient_top: "rgba(59, 130, 246, 0.3)".to_string(),
            gradient_bottom: "rgba(59, 130, 246, 0.05)".to_string(),
            gradient_height: 400.0,
            volume_color: "rgba(200, 200, 200, 0.5)".to_string(),
            grid_color: "rgba(234, 236, 239, 0.5)".to_string(),
            crosshair_color: "rgba(0, 0, 0, 0.1)".to_string(),
            crosshair_label_fill: "rgba(0, 0, 0, 0.8)".to_string(),
            current_price_fill: "rgb(59, 130, 246)".to_string(),
            label_text_color: "white".to_string(),
            axis_text_color: "#707A8A".to_string(),
            font: "12px Circular Std".to_string(),
            gain_color: "#03A66D".to_string(),
            loss_color: "#CF304A".to_string(),
        }
    }
}

/// Pixel geometry of the two stacked plots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub width: f64,
    pub container_height: f64,
    /// Share of the container taken by the price chart
    pub price_height_ratio: f64,
    /// Share of the container taken by the volume chart
    pub volume_height_ratio: f64,
    /// Vertical shift of the volume chart, negative pulls it up under the price plot
    pub volume_offset: f64,
    /// Space reserved right of both plots for value labels
    pub padding_right: f64,
    pub line_width: f64,
    pub line_tension: f64,
    pub bar_thickness: f64,
    pub label_box_width: f64,
    pub label_box_height: f64,
    pub label_box_radius: f64,
    pub label_box_gap: f64,
    /// Height reserved under the volume bars for time labels
    pub time_axis_height: f64,
    pub max_time_ticks: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 752.0,
            container_height: 400.0,
            price_height_ratio: 0.7,
            volume_height_ratio: 0.2,
            volume_offset: -80.0,
            padding_right: 80.0,
            line_width: 2.0,
            line_tension: 0.4,
            bar_thickness: 2.0,
            label_box_width: 70.0,
            label_box_height: 24.0,
            label_box_radius: 4.0,
            label_box_gap: 5.0,
            time_axis_height: 20.0,
            max_time_ticks: 6,
        }
    }
}

impl LayoutConfig {
    pub fn price_height(&self) -> f64 {
        self.container_height * self.price_height_ratio
    }

    pub fn volume_height(&self) -> f64 {
        self.container_height * self.volume_height_ratio
    }

    /// Top of the volume canvas relative to the container.
    pub fn volume_top(&self) -> f64 {
        self.price_height() + self.volume_offset
    }
}

impl ChartConfig {
    /// Parse a (possibly partial) JSON document over the defaults and validate it.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: ChartConfig = serde_json::from_str(json)?;
        ConfigValidator::validate(&config)?;
        log::debug!(
            "Loaded chart config for {}/{}",
            config.api.coin_id,
            config.api.vs_currency
        );
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
