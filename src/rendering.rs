// Painting of computed frame stat geometry
#![allow(clippy::collapsible_if)]

use crate::data_types::FrameStatGeometry;
use crate::theme::FrameStatTheme;
use crate::utils::PixelsExt;
use gpui::*;

/// Paints vertical grid lines at every tick.
pub fn paint_grid(window: &mut Window, geometry: &FrameStatGeometry, theme: &FrameStatTheme) {
    let bounds = geometry.graph_bounds;
    let top = bounds.origin.y.as_f32() + 0.5;
    let bottom = (bounds.origin.y + bounds.size.height).as_f32() - 0.5;

    let mut builder = PathBuilder::stroke(px(1.0));
    let mut has_lines = false;
    for tick in &geometry.ticks {
        builder.move_to(Point::new(tick.x, px(top)));
        builder.line_to(Point::new(tick.x, px(bottom)));
        has_lines = true;
    }
    if has_lines {
        if let Ok(path) = builder.build() {
            window.paint_path(path, theme.grid_line);
        }
    }

    // Baseline
    let mut baseline = PathBuilder::stroke(px(1.0));
    baseline.move_to(Point::new(bounds.origin.x, px(bottom)));
    baseline.line_to(Point::new(bounds.origin.x + bounds.size.width, px(bottom)));
    if let Ok(path) = baseline.build() {
        window.paint_path(path, theme.axis_line);
    }
}

/// Paints each series as a filled band between its lower and upper edges, in rank order.
pub fn paint_bands(window: &mut Window, geometry: &FrameStatGeometry, theme: &FrameStatTheme) {
    for band in &geometry.bands {
        if band.upper.len() < 2 || band.upper.len() != band.lower.len() {
            continue;
        }

        let mut fill_builder = PathBuilder::fill();
        fill_builder.move_to(band.upper[0]);
        for point in band.upper.iter().skip(1) {
            fill_builder.line_to(*point);
        }
        for point in band.lower.iter().rev() {
            fill_builder.line_to(*point);
        }
        fill_builder.line_to(band.upper[0]);
        if let Ok(path) = fill_builder.build() {
            window.paint_path(path, band.color.alpha(theme.band_fill_alpha));
        }

        let mut line_builder = PathBuilder::stroke(theme.band_line_width);
        line_builder.move_to(band.upper[0]);
        for point in band.upper.iter().skip(1) {
            line_builder.line_to(*point);
        }
        if let Ok(path) = line_builder.build() {
            window.paint_path(path, band.color);
        }
    }
}

fn paint_text(
    text: SharedString,
    origin: Point<Pixels>,
    font_size: Pixels,
    color: Hsla,
    clip: Bounds<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let run = TextRun {
        len: text.len(),
        font: TextStyle::default().font(),
        color,
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    if let Ok(lines) = window
        .text_system()
        .shape_text(text, font_size, &[run], None, None)
    {
        for line in lines {
            let _ = line.paint(origin, font_size, TextAlign::Left, Some(clip), window, cx);
        }
    }
}

/// Tick labels along the bottom of the graph, just right of each grid line.
pub fn paint_tick_labels(
    window: &mut Window,
    cx: &mut App,
    geometry: &FrameStatGeometry,
    theme: &FrameStatTheme,
) {
    let graph = geometry.graph_bounds;
    let top = graph.origin.y + graph.size.height - theme.axis_label_size - px(4.0);
    for tick in &geometry.ticks {
        paint_text(
            tick.label.clone().into(),
            Point::new(tick.x + px(2.0), top),
            theme.axis_label_size,
            theme.axis_label,
            graph,
            window,
            cx,
        );
    }
}

/// Legend strip with one swatch and label per registered series, plus the
/// mode label in the toggle region.
pub fn paint_legend(
    window: &mut Window,
    cx: &mut App,
    geometry: &FrameStatGeometry,
    theme: &FrameStatTheme,
) {
    let strip = geometry.legend_bounds;
    if strip.size.width > px(0.0) {
        window.paint_quad(fill(strip, theme.legend_background));
        for entry in &geometry.legend {
            window.paint_quad(fill(entry.swatch, entry.color));
            paint_text(
                entry.label.clone().into(),
                entry.label_origin - Point::new(px(0.0), px(2.0)),
                theme.legend_label_size,
                theme.legend_label,
                strip,
                window,
                cx,
            );
        }
    }

    let toggle = geometry.toggle_bounds;
    if toggle.size.width <= px(0.0) || toggle.size.height <= px(0.0) {
        return;
    }
    if toggle != strip {
        // Legend hidden: the badge needs its own background.
        window.paint_quad(fill(toggle, theme.legend_background));
    }
    let mode = if geometry.show_percent { "%" } else { "ms" };
    paint_text(
        mode.into(),
        toggle.origin + Point::new(px(6.0), toggle.size.height - px(16.0)),
        theme.axis_label_size,
        theme.axis_label,
        toggle,
        window,
        cx,
    );
}
