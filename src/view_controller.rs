use crate::data_types::{CenterOffset, ViewState, VisibleWindow, DEFAULT_TOTAL_TIME};
use tracing::{trace, warn};

/// Narrowest window the graph will ever show, in seconds.
pub const MIN_WINDOW_SPAN: f64 = 1e-3;

/// Tolerance used when snapping tick multiples onto the window edges.
const TICK_EPSILON: f64 = 1e-9;

/// ViewController holds the time-window math (window resolution, ticks, pan)
/// independently of the GPUI infrastructure to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Visible span after sanitizing `total_time`.
    ///
    /// Non-positive or non-finite durations fall back to the default, and the
    /// span is never narrower than one sample interval or `MIN_WINDOW_SPAN`.
    pub fn effective_span(total_time: f64, sample_interval: Option<f64>) -> f64 {
        let mut span = if total_time.is_finite() && total_time > 0.0 {
            total_time
        } else {
            warn!(total_time, "degenerate visible duration, using default");
            DEFAULT_TOTAL_TIME
        };
        if let Some(interval) = sample_interval.filter(|i| i.is_finite() && *i > 0.0) {
            span = span.max(interval);
        }
        span.max(MIN_WINDOW_SPAN)
    }

    /// Center requested by the view state before any clamping.
    pub fn requested_center(offset: CenterOffset, history_end: Option<f64>, span: f64) -> f64 {
        let live_center = history_end.unwrap_or(0.0) - span / 2.0;
        match offset {
            CenterOffset::At(center) if center.is_finite() => center,
            CenterOffset::At(center) => {
                warn!(center, "non-finite center offset, following live edge");
                live_center
            }
            CenterOffset::Live => live_center,
        }
    }

    /// Resolves the visible time window for a view state and the available history.
    ///
    /// The window keeps its width and is shifted to stay inside the history.
    /// When the history is shorter than the window, the window shrinks to the
    /// history extent.
    pub fn resolve_window(
        view: &ViewState,
        history: Option<(f64, f64)>,
        sample_interval: Option<f64>,
    ) -> VisibleWindow {
        let span = Self::effective_span(view.total_time, sample_interval);
        let history = history.filter(|(first, last)| first.is_finite() && last.is_finite() && first <= last);

        let Some((first, last)) = history else {
            let center = Self::requested_center(view.center_offset, None, span);
            return VisibleWindow::new(center - span / 2.0, center + span / 2.0);
        };

        let history_span = last - first;
        if history_span < span {
            let extent = history_span.max(MIN_WINDOW_SPAN);
            trace!(history_span, span, "history shorter than window");
            return VisibleWindow::new(last - extent, last);
        }

        let center = Self::requested_center(view.center_offset, Some(last), span);
        let mut start = center - span / 2.0;
        let mut end = start + span;
        if start < first {
            start = first;
            end = first + span;
        } else if end > last {
            end = last;
            start = last - span;
        }
        VisibleWindow::new(start, end)
    }

    /// Every multiple of `tick_spacing` inside the window, capped at `max_ticks`.
    ///
    /// When there would be more than `max_ticks` multiples, only those whose index
    /// is a multiple of n are kept.
    pub fn tick_positions(window: &VisibleWindow, tick_spacing: f64, max_ticks: usize) -> Vec<f64> {
        let span = window.span();
        if !span.is_finite() || span <= 0.0 {
            return vec![];
        }
        let spacing = if tick_spacing.is_finite() && tick_spacing > 0.0 {
            tick_spacing
        } else {
            warn!(tick_spacing, "degenerate tick spacing, using window span");
            span
        };

        let first_k = (window.start / spacing - TICK_EPSILON).ceil() as i64;
        let last_k = (window.end / spacing + TICK_EPSILON).floor() as i64;
        if last_k < first_k {
            return vec![];
        }

        let count = last_k.saturating_sub(first_k).saturating_add(1) as u64;
        let max_ticks = max_ticks.max(1) as u64;
        let stride = if count > max_ticks {
            count.div_ceil(max_ticks)
        } else {
            1
        };

        // Kept ticks sit on multiples of the stride so they stay put while panning.
        let stride = stride as i64;
        let aligned = first_k + (stride - first_k.rem_euclid(stride)) % stride;
        (aligned..=last_k)
            .step_by(stride as usize)
            .map(|k| k as f64 * spacing)
            .collect()
    }

    /// Converts a horizontal drag into a new center time.
    ///
    /// Dragging right pulls older samples into view, so the center decreases.
    pub fn pan_center(start_center: f64, delta_pixels: f32, total_pixels: f32, span: f64) -> f64 {
        if total_pixels <= 0.0 || !total_pixels.is_finite() || !delta_pixels.is_finite() {
            return start_center;
        }
        let ratio = span / total_pixels as f64;
        start_center - delta_pixels as f64 * ratio
    }

    /// Keeps a center inside the history and reports whether it reached the live edge.
    pub fn clamp_center(center: f64, history: Option<(f64, f64)>, span: f64) -> (f64, bool) {
        let Some((first, last)) = history else {
            return (center, false);
        };
        let min_center = first + span / 2.0;
        let max_center = last - span / 2.0;
        if max_center < min_center {
            // History narrower than the window: the window is pinned anyway.
            return (center, true);
        }
        let clamped = center.clamp(min_center, max_center);
        (clamped, clamped >= max_center)
    }

    /// Maps a pixel position to a value in a given domain.
    pub fn map_pixels_to_value(
        pixels: f32,
        total_pixels: f32,
        min_val: f64,
        max_val: f64,
        invert: bool,
    ) -> f64 {
        if total_pixels <= 0.0 {
            return min_val;
        }
        let pct = (pixels / total_pixels).clamp(0.0, 1.0) as f64;
        let effective_pct = if invert { 1.0 - pct } else { pct };
        min_val + (max_val - min_val) * effective_pct
    }
}
