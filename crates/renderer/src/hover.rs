//! Pointer to data point resolution

use price_chart_shared::SeriesPoint;

use crate::layout::ChartArea;
use crate::scales::{LinearScale, TimeScale};

/// The price point closest in time to the pointer, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPoint {
    pub index: usize,
    pub timestamp_ms: i64,
    pub price: f64,
    pub x: f64,
    pub y: f64,
}

/// Index of the point nearest to `timestamp_ms`. `prices` must be chronological.
pub fn nearest_index(prices: &[SeriesPoint], timestamp_ms: i64) -> Option<usize> {
    if prices.is_empty() {
        return None;
    }
    let after = prices.partition_point(|p| p.timestamp_ms < timestamp_ms);
    if after == 0 {
        return Some(0);
    }
    if after == prices.len() {
        return Some(prices.len() - 1);
    }
    let before = after - 1;
    let to_before = timestamp_ms.saturating_sub(prices[before].timestamp_ms);
    let to_after = prices[after].timestamp_ms.saturating_sub(timestamp_ms);
    Some(if to_after < to_before { after } else { before })
}

/// Resolve a pointer position; `None` outside `area` or without data.
pub fn resolve_hover(
    position: (f64, f64),
    area: &ChartArea,
    prices: &[SeriesPoint],
    time_scale: &TimeScale,
    price_scale: &LinearScale,
) -> Option<HoverPoint> {
    let (x, y) = position;
    if !area.contains(x, y) {
        return None;
    }
    let index = nearest_index(prices, time_scale.value_for(x))?;
    let point = prices[index];
    Some(HoverPoint {
        index,
        timestamp_ms: point.timestamp_ms,
        price: point.value,
        x: time_scale.pixel_for(point.timestamp_ms),
        y: price_scale.pixel_for(point.value),
    })
}
