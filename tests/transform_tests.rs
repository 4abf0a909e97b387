use gpui::{px, Bounds, Point, Size};
use gpui_frame_stats::scales::ChartScale;
use gpui_frame_stats::transform::PlotTransform;

#[test]
fn test_chart_scale_linear() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));

    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(50.0), 250.0);
    assert_eq!(scale.map(100.0), 500.0);

    assert_eq!(scale.invert(0.0), 0.0);
    assert_eq!(scale.invert(250.0), 50.0);
    assert_eq!(scale.invert(500.0), 100.0);
}

#[test]
fn test_degenerate_domain_is_widened() {
    let scale = ChartScale::new_linear((3.0, 3.0), (0.0, 100.0));
    assert_eq!(scale.domain(), (2.5, 3.5));
    assert_eq!(scale.map(3.0), 50.0);

    let scale = ChartScale::new_linear((f64::NAN, 1.0), (0.0, 100.0));
    assert_eq!(scale.domain(), (0.0, 1.0));
    assert!(scale.map(f64::NAN).is_finite());
}

#[test]
fn test_linear_coeffs() {
    let scale = ChartScale::new_linear((10.0, 20.0), (0.0, 200.0));
    let (m, c) = scale.get_linear_coeffs();
    assert!((m - 20.0).abs() < 1e-4);
    assert!((c + 200.0).abs() < 1e-3);
}

#[test]
fn test_window_transform() {
    // Graph to the right of a 90px legend strip
    let bounds = Bounds::new(Point::new(px(90.0), px(0.0)), Size::new(px(200.0), px(100.0)));
    let transform = PlotTransform::for_window((0.0, 10.0), 5.0, bounds);

    let origin = transform.data_to_screen(0.0, 0.0);
    assert_eq!(origin.x, px(90.0));
    assert_eq!(origin.y, px(100.0));

    let top_right = transform.data_to_screen(10.0, 5.0);
    assert_eq!(top_right.x, px(290.0));
    assert_eq!(top_right.y, px(0.0));

    let (time, value) = transform.screen_to_data(Point::new(px(190.0), px(50.0)));
    assert!((time - 5.0).abs() < 1e-6);
    assert!((value - 2.5).abs() < 1e-6);
}

#[test]
fn test_offset_bounds() {
    let bounds = Bounds::new(Point::new(px(40.0), px(30.0)), Size::new(px(100.0), px(100.0)));
    let transform = PlotTransform::for_window((100.0, 110.0), 1.0, bounds);

    assert_eq!(transform.x_data_to_screen(105.0), px(90.0));
    assert_eq!(transform.y_data_to_screen(1.0), px(30.0));
    assert_eq!(transform.y_data_to_screen(0.0), px(130.0));
}
