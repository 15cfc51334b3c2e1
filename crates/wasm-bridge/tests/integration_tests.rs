//! Integration tests for the widget engine

use price_chart_config::ChartConfig;
use price_chart_renderer::RecordingSurface;
use price_chart_shared::{
    ChartError, MarketChart, MenuTab, PhysicalPosition, PointerEvent, SeriesPoint, TimeRange,
};
use price_chart_wasm::ChartEngine;

fn chart(prices: &[f64]) -> MarketChart {
    let points: Vec<SeriesPoint> = prices
        .iter()
        .enumerate()
        .map(|(i, p)| SeriesPoint::new(1_709_596_800_000 + i as i64 * 3_600_000, *p))
        .collect();
    MarketChart::new(points.clone(), points)
}

#[test]
fn test_mount_then_load_updates_header() {
    let mut engine = ChartEngine::new(ChartConfig::default());
    assert_eq!(engine.mount(), Some(TimeRange::OneWeek));
    assert_eq!(engine.mount(), None);

    assert!(engine.apply(Ok(chart(&[66_000.0, 67_234.5]))));

    let header = engine.header();
    assert_eq!(header.price_text, "67,234.5");
    assert_eq!(header.currency, "USD");
    assert!(header.change_text.starts_with("+$1,234.5 ("));
    assert_eq!(header.change_color, "#03A66D");
}

#[test]
fn test_range_selection_fetches_only_on_change() {
    let mut engine = ChartEngine::new(ChartConfig::default());
    engine.mount();

    assert_eq!(engine.select_range("1w").unwrap(), None);
    let due = engine.select_range("1y").unwrap();
    assert_eq!(due, Some(TimeRange::OneYear));
    assert_eq!(due.map(|r| r.days()), Some(6));
    assert_eq!(engine.select_range("1y").unwrap(), None);
}

#[test]
fn test_failed_load_keeps_header() {
    let mut engine = ChartEngine::new(ChartConfig::default());
    engine.apply(Ok(chart(&[100.0, 90.0])));
    let before = engine.header();

    assert!(!engine.apply(Err(ChartError::Network {
        message: "offline".to_string(),
    })));

    assert_eq!(engine.header(), before);
    assert_eq!(before.change_color, "#CF304A");
    assert_eq!(before.change_text, "-$10 (-10.00%)");
}

#[test]
fn test_tabs_and_fullscreen_are_cosmetic() {
    let mut engine = ChartEngine::new(ChartConfig::default());
    engine.apply(Ok(chart(&[1.0, 2.0, 3.0])));

    assert!(engine.select_tab("Analysis").unwrap());
    assert!(engine.set_fullscreen(true));

    let ui = engine.store().ui();
    assert_eq!(ui.menu_tab, MenuTab::Analysis);
    assert!(ui.fullscreen);
    assert_eq!(ui.time_range, TimeRange::OneWeek);
    assert_eq!(engine.store().prices().len(), 3);
}

#[test]
fn test_render_snapshot_tracks_hover() {
    let mut engine = ChartEngine::new(ChartConfig::default());
    let mut surface = RecordingSurface::new(752.0, 400.0);
    engine.apply(Ok(chart(&[10.0, 20.0, 30.0, 40.0])));

    engine.render(&mut surface);
    assert_eq!(engine.snapshot().hovered_price, None);

    engine.handle_cursor_event(PointerEvent::CursorMoved {
        position: PhysicalPosition::new(660.0, 50.0),
    });
    engine.render(&mut surface);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.hovered_price, Some(40.0));
    assert_eq!(snapshot.price_points, 4);
    assert_eq!(snapshot.quote.current_price, 40.0);

    engine.handle_cursor_event(PointerEvent::CursorLeft);
    engine.render(&mut surface);
    assert_eq!(engine.snapshot().hovered_price, None);
}

#[test]
fn test_empty_data_renders_without_labels() {
    let mut engine = ChartEngine::new(ChartConfig::default());
    let mut surface = RecordingSurface::new(752.0, 400.0);

    let summary = engine.render(&mut surface).clone();

    assert!(summary.time_labels.is_empty());
    assert_eq!(surface.texts(), vec!["$0.00"]);
}
