//! Configuration validation utilities

use price_chart_shared::{ChartError, ChartResult};

use crate::{ApiConfig, ChartConfig, LayoutConfig};

/// Configuration validator with field-level checks
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &ChartConfig) -> ChartResult<()> {
        Self::validate_api(&config.api)?;
        Self::validate_layout(&config.layout)?;

        if config.theme.gradient_height <= 0.0 {
            return Err(invalid(
                "theme.gradientHeight",
                format!("must be positive, got {}", config.theme.gradient_height),
            ));
        }

        Ok(())
    }

    fn validate_api(api: &ApiConfig) -> ChartResult<()> {
        if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
            return Err(invalid(
                "api.baseUrl",
                format!("must be an http(s) URL, got '{}'", api.base_url),
            ));
        }
        if api.coin_id.trim().is_empty() {
            return Err(invalid("api.coinId", "cannot be empty".to_string()));
        }
        if api.vs_currency.trim().is_empty() {
            return Err(invalid("api.vsCurrency", "cannot be empty".to_string()));
        }
        Ok(())
    }

    fn validate_layout(layout: &LayoutConfig) -> ChartResult<()> {
        if layout.width <= layout.padding_right {
            return Err(invalid(
                "layout.width",
                format!(
                    "{} leaves no plot area after {} px of right padding",
                    layout.width, layout.padding_right
                ),
            ));
        }

        if layout.container_height <= 0.0 {
            return Err(invalid(
                "layout.containerHeight",
                format!("must be positive, got {}", layout.container_height),
            ));
        }

        for (field, ratio) in [
            ("layout.priceHeightRatio", layout.price_height_ratio),
            ("layout.volumeHeightRatio", layout.volume_height_ratio),
        ] {
            if ratio <= 0.0 || ratio > 1.0 {
                return Err(invalid(field, format!("must be in (0, 1], got {ratio}")));
            }
        }

        if !(0.0..=1.0).contains(&layout.line_tension) {
            return Err(invalid(
                "layout.lineTension",
                format!("must be between 0 and 1, got {}", layout.line_tension),
            ));
        }

        if layout.line_width <= 0.0 || layout.bar_thickness <= 0.0 {
            return Err(invalid(
                "layout.lineWidth",
                "line width and bar thickness must be positive".to_string(),
            ));
        }

        if layout.max_time_ticks == 0 {
            return Err(invalid(
                "layout.maxTimeTicks",
                "must allow at least one tick".to_string(),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> ChartError {
    ChartError::InvalidConfig {
        message: format!("{field}: {message}"),
        field: Some(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&ChartConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = ChartConfig::default();
        config.api.base_url = "ftp://example.com".to_string();

        match ConfigValidator::validate(&config) {
            Err(ChartError::InvalidConfig { field, .. }) => {
                assert_eq!(field.as_deref(), Some("api.baseUrl"));
            }
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_layout() {
        let mut config = ChartConfig::default();
        config.layout.price_height_ratio = 1.5;
        assert!(ConfigValidator::validate(&config).is_err());

        let mut config = ChartConfig::default();
        config.layout.width = 60.0;
        assert!(ConfigValidator::validate(&config).is_err());

        let mut config = ChartConfig::default();
        config.layout.max_time_ticks = 0;
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_coin() {
        let mut config = ChartConfig::default();
        config.api.coin_id = "  ".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
