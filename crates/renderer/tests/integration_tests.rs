//! Integration tests for the chart renderer

use price_chart_config::ChartConfig;
use price_chart_renderer::{ChartRenderer, DrawCommand, Paint, RecordingSurface};
use price_chart_shared::{DerivedQuote, MarketChart, PhysicalPosition, SeriesPoint};

// 2024-03-05T00:00:00Z
const START: i64 = 1_709_596_800_000;
const HOUR: i64 = 3_600_000;

fn week_of_hourly_data() -> MarketChart {
    let prices: Vec<SeriesPoint> = (0..7 * 24)
        .map(|i| SeriesPoint::new(START + i * HOUR, 60_000.0 + (i as f64 * 0.3).sin() * 500.0))
        .collect();
    let volumes: Vec<SeriesPoint> = (0..7 * 24)
        .map(|i| SeriesPoint::new(START + i * HOUR, 1.0e9 + i as f64 * 1.0e6))
        .collect();
    MarketChart::new(prices, volumes)
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(752.0, 400.0)
}

#[test]
fn test_empty_chart_draws_without_labels() {
    let renderer = ChartRenderer::new(&ChartConfig::default());
    let mut surface = surface();

    let summary = renderer.render(
        &mut surface,
        &MarketChart::default(),
        DerivedQuote::default(),
        Some(PhysicalPosition::new(100.0, 100.0)),
    );

    assert!(summary.time_labels.is_empty());
    assert!(summary.hover.is_none());
    assert_eq!(surface.texts(), vec!["$0.00"]);
    let data_commands = surface.count(|c| {
        matches!(c, DrawCommand::BezierCurveTo { .. } | DrawCommand::FillRect { .. })
    });
    assert_eq!(data_commands, 0);
}

#[test]
fn test_badge_is_drawn_without_hover() {
    let chart = week_of_hourly_data();
    let quote = DerivedQuote::from_prices(&chart.prices);
    let renderer = ChartRenderer::new(&ChartConfig::default());
    let mut surface = surface();

    let summary = renderer.render(&mut surface, &chart, quote, None);

    assert!(summary.hover.is_none());
    let badge = format!("${:.2}", quote.current_price);
    assert_eq!(surface.texts().iter().filter(|t| **t == badge).count(), 1);

    let rects = surface.rounded_rects();
    assert_eq!(rects.len(), 1);
    let (x, _, width, height) = rects[0];
    assert_eq!((x, width, height), (677.0, 70.0, 24.0));

    assert!(surface
        .commands()
        .contains(&DrawCommand::SetFill(Paint::solid("rgb(59, 130, 246)"))));
}

#[test]
fn test_time_labels_are_limited_and_formatted() {
    let chart = week_of_hourly_data();
    let renderer = ChartRenderer::new(&ChartConfig::default());
    let mut surface = surface();

    let summary = renderer.render(&mut surface, &chart, DerivedQuote::default(), None);

    assert!(!summary.time_labels.is_empty());
    assert!(summary.time_labels.len() <= 6);
    assert_eq!(summary.time_labels[0], "Mar 5");
    for label in &summary.time_labels {
        assert!(surface.texts().contains(&label.as_str()));
    }
}

#[test]
fn test_hover_draws_crosshair_and_tooltip() {
    let chart = week_of_hourly_data();
    let quote = DerivedQuote::from_prices(&chart.prices);
    let renderer = ChartRenderer::new(&ChartConfig::default());
    let mut surface = surface();

    let summary = renderer.render(
        &mut surface,
        &chart,
        quote,
        Some(PhysicalPosition::new(336.0, 150.0)),
    );

    let hover = summary.hover.expect("pointer is inside the plot");
    let hovered = chart.prices[hover.index];
    assert_eq!(hover.price, hovered.value);

    let price_label = format!("${:.2}", hovered.value);
    assert!(surface.texts().iter().filter(|t| **t == price_label).count() >= 2);
    assert!(surface.texts().contains(&"Mar 08, 2024"));

    // crosshair label, tooltip box, current price badge
    assert_eq!(surface.rounded_rects().len(), 3);
    assert!(surface.commands().contains(&DrawCommand::SetStroke {
        color: "rgba(0, 0, 0, 0.1)".to_string(),
        width: 1.0,
    }));
}

#[test]
fn test_pointer_outside_plot_has_no_hover() {
    let chart = week_of_hourly_data();
    let renderer = ChartRenderer::new(&ChartConfig::default());
    let mut surface = surface();

    let summary = renderer.render(
        &mut surface,
        &chart,
        DerivedQuote::default(),
        Some(PhysicalPosition::new(720.0, 150.0)),
    );

    assert!(summary.hover.is_none());
    assert_eq!(surface.rounded_rects().len(), 1);
}

#[test]
fn test_price_fill_and_volume_bars() {
    let chart = week_of_hourly_data();
    let renderer = ChartRenderer::new(&ChartConfig::default());
    let mut surface = surface();

    renderer.render(&mut surface, &chart, DerivedQuote::default(), None);

    assert!(surface.commands().contains(&DrawCommand::SetFill(Paint::VerticalGradient {
        top: 0.0,
        bottom: 400.0,
        from: "rgba(59, 130, 246, 0.3)".to_string(),
        to: "rgba(59, 130, 246, 0.05)".to_string(),
    })));
    assert_eq!(
        surface.count(|c| matches!(c, DrawCommand::BezierCurveTo { .. })),
        2 * (chart.prices.len() - 1)
    );
    assert_eq!(
        surface.count(|c| matches!(c, DrawCommand::FillRect { .. })),
        chart.total_volumes.len()
    );
}

#[test]
fn test_hover_at_matches_render() {
    let chart = week_of_hourly_data();
    let renderer = ChartRenderer::new(&ChartConfig::default());
    let position = PhysicalPosition::new(500.0, 220.0);

    let hover = renderer.hover_at(&chart, position);
    let mut surface = surface();
    let summary = renderer.render(&mut surface, &chart, DerivedQuote::default(), Some(position));

    assert!(hover.is_some());
    assert_eq!(hover, summary.hover);
}

#[test]
fn test_out_of_range_timestamps_render_without_panicking() {
    let chart: MarketChart =
        serde_json::from_str(r#"{"prices":[[-1e19,1.0],[1e19,2.0]],"total_volumes":[]}"#).unwrap();
    let renderer = ChartRenderer::new(&ChartConfig::default());
    let mut surface = surface();

    let summary = renderer.render(
        &mut surface,
        &chart,
        DerivedQuote::from_prices(&chart.prices),
        Some(PhysicalPosition::new(300.0, 150.0)),
    );

    assert!(summary.time_labels.len() <= ChartConfig::default().layout.max_time_ticks);
    assert!(summary.hover.is_some());
}

#[test]
fn test_local_timezone_shifts_tooltip_date() {
    let chart = week_of_hourly_data();
    let mut renderer = ChartRenderer::new(&ChartConfig::default());
    // Left edge of the plot hovers the first point, 00:00Z on Mar 5.
    let position = PhysicalPosition::new(renderer.layout().price_area.left + 1.0, 150.0);

    let mut utc_surface = surface();
    renderer.render(&mut utc_surface, &chart, DerivedQuote::default(), Some(position));
    assert!(utc_surface.texts().contains(&"Mar 05, 2024"));

    renderer.set_timezone_offset_minutes(300);
    let mut local_surface = surface();
    let summary =
        renderer.render(&mut local_surface, &chart, DerivedQuote::default(), Some(position));
    assert!(local_surface.texts().contains(&"Mar 04, 2024"));
    assert_eq!(summary.time_labels.first().map(String::as_str), Some("Mar 5"));
}
