//! The draw pass: view state + registered series -> screen geometry.

use crate::data_types::{
    FrameStatConfig, FrameStatGeometry, LegendConfig, LegendEntry, LegendPosition, SeriesBand,
    StatSample, TickMark, ViewState, DEFAULT_LABEL_SPACING,
};
use crate::registry::StatRegistry;
use crate::stacking::StackedColumns;
use crate::transform::PlotTransform;
use crate::utils::tick_formatter::{determine_tick_format, format_tick};
use crate::utils::PixelsExt;
use crate::view_controller::ViewController;
use gpui::*;
use tracing::trace;

const LEGEND_PADDING: f32 = 6.0;
const SWATCH_LABEL_GAP: f32 = 4.0;

/// Size of the mode badge that stands in for the legend strip as the
/// percent toggle when the legend is disabled.
pub const MODE_BADGE_WIDTH: f32 = 32.0;
pub const MODE_BADGE_HEIGHT: f32 = 18.0;

/// Legend strip, graph area and percent toggle region of a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRegions {
    pub legend: Bounds<Pixels>,
    pub graph: Bounds<Pixels>,
    /// The legend strip, or the mode badge in the graph's top corner on the
    /// legend side when the legend is disabled.
    pub toggle: Bounds<Pixels>,
}

impl PanelRegions {
    /// Splits the panel into a legend strip on one side and the graph on the rest.
    /// A disabled legend leaves a zero-width strip.
    pub fn split(bounds: Bounds<Pixels>, legend: &LegendConfig) -> Self {
        let total_w = bounds.size.width.as_f32().max(0.0);
        let total_h = bounds.size.height.as_f32().max(0.0);
        let height = px(total_h);
        let legend_w = if legend.enabled && legend.width.is_finite() {
            legend.width.clamp(0.0, total_w)
        } else {
            0.0
        };
        let graph_w = total_w - legend_w;

        let (legend_x, graph_x) = match legend.position {
            LegendPosition::Left => (bounds.origin.x, bounds.origin.x + px(legend_w)),
            LegendPosition::Right => (bounds.origin.x + px(graph_w), bounds.origin.x),
        };

        let legend_bounds = Bounds::new(
            Point::new(legend_x, bounds.origin.y),
            Size::new(px(legend_w), height),
        );

        let toggle = if legend.enabled {
            legend_bounds
        } else {
            let badge_w = MODE_BADGE_WIDTH.min(graph_w);
            let badge_x = match legend.position {
                LegendPosition::Left => graph_x,
                LegendPosition::Right => graph_x + px(graph_w - badge_w),
            };
            Bounds::new(
                Point::new(badge_x, bounds.origin.y),
                Size::new(px(badge_w), px(MODE_BADGE_HEIGHT.min(total_h))),
            )
        };

        Self {
            legend: legend_bounds,
            graph: Bounds::new(
                Point::new(graph_x, bounds.origin.y),
                Size::new(px(graph_w), height),
            ),
            toggle,
        }
    }

    /// Half-open containment: the far edges belong to the neighbouring region.
    pub fn toggle_contains(&self, point: Point<Pixels>) -> bool {
        let b = self.toggle;
        point.x >= b.origin.x
            && point.x < b.origin.x + b.size.width
            && point.y >= b.origin.y
            && point.y < b.origin.y + b.size.height
    }
}

pub struct FrameStatLayout;

impl FrameStatLayout {
    /// Computes the geometry for one frame.
    ///
    /// Reads the current samples through the registry's handles and mutates nothing.
    pub fn compute(
        view: &ViewState,
        registry: &StatRegistry,
        bounds: Bounds<Pixels>,
        config: &FrameStatConfig,
    ) -> FrameStatGeometry {
        let regions = PanelRegions::split(bounds, &config.legend);

        let sources: Vec<_> = registry
            .slots()
            .iter()
            .map(|slot| {
                let source = slot.handle.upgrade();
                if source.is_none() {
                    trace!(rank = slot.rank, label = %slot.label, "stat source dropped");
                }
                source
            })
            .collect();

        let mut history: Option<(f64, f64)> = None;
        let mut sample_interval: Option<f64> = None;
        for source in sources.iter().flatten() {
            let source = source.read();
            if let Some((first, last)) = source.time_bounds() {
                history = Some(match history {
                    Some((f, l)) => (f.min(first), l.max(last)),
                    None => (first, last),
                });
            }
            if let Some(interval) = source.sample_interval() {
                sample_interval = Some(sample_interval.map_or(interval, |i: f64| i.min(interval)));
            }
        }

        let window = ViewController::resolve_window(view, history, sample_interval);

        let samples: Vec<Vec<StatSample>> = sources
            .iter()
            .map(|source| match source {
                Some(source) => source.read().iter_range(window.start, window.end).collect(),
                None => vec![],
            })
            .collect();

        let columns = StackedColumns::build(&samples, view.show_percent);
        let value_max = if columns.max_total.is_finite() && columns.max_total > 0.0 {
            columns.max_total
        } else {
            1.0
        };
        let transform = PlotTransform::for_window((window.start, window.end), value_max, regions.graph);

        let bands = registry
            .slots()
            .iter()
            .zip(&columns.series)
            .filter(|(_, stacked)| !stacked.is_empty())
            .map(|(slot, stacked)| {
                let present: Vec<usize> = stacked.present_columns().collect();
                SeriesBand {
                    rank: slot.rank,
                    label: slot.label.clone(),
                    color: slot.color,
                    upper: present
                        .iter()
                        .map(|&i| transform.data_to_screen(columns.times[i], stacked.upper[i]))
                        .collect(),
                    lower: present
                        .iter()
                        .map(|&i| transform.data_to_screen(columns.times[i], stacked.lower[i]))
                        .collect(),
                    values: present
                        .iter()
                        .filter_map(|&i| stacked.values[i].map(|v| (columns.times[i], v)))
                        .collect(),
                }
            })
            .collect();

        let tick_times = ViewController::tick_positions(&window, view.tick_spacing, config.max_ticks);
        let tick_spacing = if tick_times.len() > 1 {
            tick_times[1] - tick_times[0]
        } else {
            view.tick_spacing
        };
        let format = determine_tick_format(tick_spacing, window.end);
        let ticks = tick_times
            .into_iter()
            .map(|time| TickMark {
                time,
                x: transform.x_data_to_screen(time),
                label: format_tick(time, format),
            })
            .collect();

        let legend = if config.legend.enabled {
            Self::legend_entries(registry, regions.legend, view.label_spacing, &config.legend)
        } else {
            vec![]
        };

        FrameStatGeometry {
            window,
            history,
            graph_bounds: regions.graph,
            legend_bounds: regions.legend,
            toggle_bounds: regions.toggle,
            bands,
            ticks,
            legend,
            value_max,
            show_percent: view.show_percent,
        }
    }

    /// Legend rows in rank order, each `label_spacing` below the previous one.
    pub fn legend_entries(
        registry: &StatRegistry,
        legend_bounds: Bounds<Pixels>,
        label_spacing: f32,
        legend: &LegendConfig,
    ) -> Vec<LegendEntry> {
        let spacing = if label_spacing.is_finite() && label_spacing > 0.0 {
            label_spacing
        } else {
            DEFAULT_LABEL_SPACING
        };
        let swatch = if legend.swatch_size.is_finite() {
            legend.swatch_size.max(0.0)
        } else {
            0.0
        };

        registry
            .slots()
            .iter()
            .map(|slot| {
                let row_top = legend_bounds.origin.y + px(LEGEND_PADDING + slot.rank as f32 * spacing);
                let swatch_origin = Point::new(legend_bounds.origin.x + px(LEGEND_PADDING), row_top);
                LegendEntry {
                    rank: slot.rank,
                    label: slot.label.clone(),
                    color: slot.color,
                    swatch: Bounds::new(swatch_origin, Size::new(px(swatch), px(swatch))),
                    label_origin: Point::new(swatch_origin.x + px(swatch + SWATCH_LABEL_GAP), row_top),
                }
            })
            .collect()
    }
}
