//! Plot geometry for the stacked price and volume panels

use price_chart_config::LayoutConfig;

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartArea {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Both panels share one canvas and one horizontal extent. The volume panel
/// sits under the lower part of the price panel when `volume_offset` is
/// negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub price_area: ChartArea,
    pub volume_area: ChartArea,
    /// Vertical centre of the time labels
    pub time_axis_y: f64,
    pub label_box_width: f64,
    pub label_box_height: f64,
    pub label_box_radius: f64,
    pub label_box_gap: f64,
}

impl ChartLayout {
    pub fn new(config: &LayoutConfig) -> Self {
        Self::with_size(config, config.width, config.container_height)
    }

    /// Lay out for an explicit canvas size, e.g. after a resize or in fullscreen.
    pub fn with_size(config: &LayoutConfig, width: f64, container_height: f64) -> Self {
        let sized = LayoutConfig {
            width,
            container_height,
            ..config.clone()
        };

        let plot_right = (width - config.padding_right).max(0.0);
        // Inset by half a line so the stroke is not clipped at the top edge.
        let price_top = config.line_width / 2.0;
        let price_area = ChartArea::new(0.0, price_top, plot_right, sized.price_height());

        let volume_top = sized.volume_top();
        let volume_bottom = volume_top + sized.volume_height();
        let bars_bottom = (volume_bottom - config.time_axis_height).max(volume_top);
        let volume_area = ChartArea::new(0.0, volume_top, plot_right, bars_bottom);

        Self {
            width,
            height: container_height.max(volume_bottom),
            price_area,
            volume_area,
            time_axis_y: bars_bottom + config.time_axis_height / 2.0,
            label_box_width: config.label_box_width,
            label_box_height: config.label_box_height,
            label_box_radius: config.label_box_radius,
            label_box_gap: config.label_box_gap,
        }
    }

    /// Region in which pointer movement selects a data point.
    pub fn hover_area(&self) -> ChartArea {
        ChartArea::new(
            self.price_area.left,
            self.price_area.top,
            self.price_area.right,
            self.price_area.bottom.max(self.volume_area.bottom),
        )
    }

    /// Left edge of the value label boxes drawn right of the plots.
    pub fn label_box_x(&self) -> f64 {
        self.price_area.right + self.label_box_gap
    }

    /// Horizontal centre of the value label boxes.
    pub fn label_text_x(&self) -> f64 {
        self.label_box_x() + self.label_box_width / 2.0
    }
}
