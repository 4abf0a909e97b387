use gpui_frame_stats::data_types::{CenterOffset, ViewState, VisibleWindow, DEFAULT_TOTAL_TIME};
use gpui_frame_stats::view_controller::{ViewController, MIN_WINDOW_SPAN};

fn view(total_time: f64, center_offset: CenterOffset) -> ViewState {
    ViewState {
        total_time,
        center_offset,
        ..Default::default()
    }
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn test_live_window_ends_at_latest_sample() {
    let window = ViewController::resolve_window(&view(10.0, CenterOffset::Live), Some((0.0, 100.0)), None);
    assert_close(window.start, 90.0);
    assert_close(window.end, 100.0);
}

#[test]
fn test_centered_window() {
    let window = ViewController::resolve_window(&view(10.0, CenterOffset::At(50.0)), Some((0.0, 100.0)), None);
    assert_close(window.start, 45.0);
    assert_close(window.end, 55.0);
    assert_close(window.center(), 50.0);
}

#[test]
fn test_window_is_shifted_not_shrunk() {
    // Centered too early: shifted right to start at the first sample
    let window = ViewController::resolve_window(&view(10.0, CenterOffset::At(2.0)), Some((0.0, 100.0)), None);
    assert_close(window.start, 0.0);
    assert_close(window.span(), 10.0);

    // Centered past the end: shifted left to end at the last sample
    let window = ViewController::resolve_window(&view(10.0, CenterOffset::At(500.0)), Some((0.0, 100.0)), None);
    assert_close(window.end, 100.0);
    assert_close(window.span(), 10.0);
}

#[test]
fn test_short_history_degrades_window() {
    let window = ViewController::resolve_window(&view(10.0, CenterOffset::At(3.0)), Some((2.0, 6.0)), None);
    assert_eq!(window, VisibleWindow::new(2.0, 6.0));

    // Single sample
    let window = ViewController::resolve_window(&view(10.0, CenterOffset::Live), Some((4.0, 4.0)), None);
    assert_close(window.end, 4.0);
    assert_close(window.span(), MIN_WINDOW_SPAN);
}

#[test]
fn test_window_without_history() {
    let window = ViewController::resolve_window(&view(10.0, CenterOffset::Live), None, None);
    assert_close(window.start, -10.0);
    assert_close(window.end, 0.0);

    let window = ViewController::resolve_window(&view(4.0, CenterOffset::At(7.0)), None, None);
    assert_close(window.start, 5.0);
    assert_close(window.end, 9.0);
}

#[test]
fn test_degenerate_duration_is_clamped() {
    for total in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        assert_close(ViewController::effective_span(total, None), DEFAULT_TOTAL_TIME);
    }
    // Never narrower than one sample interval
    assert_close(ViewController::effective_span(0.5, Some(2.0)), 2.0);
    assert_close(ViewController::effective_span(1e-9, None), MIN_WINDOW_SPAN);

    let window = ViewController::resolve_window(&view(-1.0, CenterOffset::At(f64::NAN)), Some((0.0, 100.0)), None);
    assert!(window.start.is_finite() && window.end.is_finite());
    assert_close(window.end, 100.0);
}

#[test]
fn test_tick_positions_on_multiples() {
    let ticks = ViewController::tick_positions(&VisibleWindow::new(0.0, 10.0), 1.0, 64);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(ticks[10], 10.0);

    let ticks = ViewController::tick_positions(&VisibleWindow::new(0.5, 3.2), 1.0, 64);
    assert_eq!(ticks, vec![1.0, 2.0, 3.0]);

    let ticks = ViewController::tick_positions(&VisibleWindow::new(-2.5, 2.5), 2.0, 64);
    assert_eq!(ticks, vec![-2.0, 0.0, 2.0]);
}

#[test]
fn test_fractional_tick_spacing_keeps_edges() {
    let ticks = ViewController::tick_positions(&VisibleWindow::new(1.0, 2.0), 0.1, 64);
    assert_eq!(ticks.len(), 11);
    assert!((ticks[0] - 1.0).abs() < 1e-9);
    assert!((ticks[10] - 2.0).abs() < 1e-9);
}

#[test]
fn test_degenerate_tick_spacing() {
    let window = VisibleWindow::new(0.0, 10.0);
    for spacing in [0.0, -1.0, f64::NAN] {
        let ticks = ViewController::tick_positions(&window, spacing, 64);
        assert_eq!(ticks, vec![0.0, 10.0]);
    }

    // Tiny spacing is capped
    let ticks = ViewController::tick_positions(&window, 1e-6, 50);
    assert!(ticks.len() <= 50);
    assert!(!ticks.is_empty());
    assert!(ticks.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_pan_center() {
    // 200px show 10s: dragging 20px right goes 1s back in time
    let center = ViewController::pan_center(50.0, 20.0, 200.0, 10.0);
    assert_close(center, 49.0);

    let center = ViewController::pan_center(50.0, -40.0, 200.0, 10.0);
    assert_close(center, 52.0);

    assert_eq!(ViewController::pan_center(50.0, 0.0, 200.0, 10.0), 50.0);
    assert_eq!(ViewController::pan_center(50.0, 20.0, 0.0, 10.0), 50.0);
}

#[test]
fn test_clamp_center() {
    let history = Some((0.0, 100.0));
    assert_eq!(ViewController::clamp_center(50.0, history, 10.0), (50.0, false));
    assert_eq!(ViewController::clamp_center(-20.0, history, 10.0), (5.0, false));
    assert_eq!(ViewController::clamp_center(99.0, history, 10.0), (95.0, true));
    assert_eq!(ViewController::clamp_center(42.0, None, 10.0), (42.0, false));
}

#[test]
fn test_map_pixels_to_value() {
    assert_eq!(ViewController::map_pixels_to_value(50.0, 100.0, 0.0, 10.0, false), 5.0);
    assert_eq!(ViewController::map_pixels_to_value(25.0, 100.0, 0.0, 10.0, true), 7.5);
    assert_eq!(ViewController::map_pixels_to_value(25.0, 0.0, 3.0, 10.0, false), 3.0);
}
