use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOTAL_TIME: f64 = 10.0;
pub const DEFAULT_TICK_SPACING: f64 = 1.0;
pub const DEFAULT_LABEL_SPACING: f32 = 14.0;

/// Which time is centered in the visible window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CenterOffset {
    /// Follow the most recent sample; the window ends at the trailing edge.
    #[default]
    Live,
    /// Center on a fixed time (seconds).
    At(f64),
}

/// Mutable view parameters read by the layout pass and written by pointer handlers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Time span shown across the graph width, in seconds.
    pub total_time: f64,
    /// Time between axis ticks, in seconds.
    pub tick_spacing: f64,
    /// Vertical offset between legend entries, in pixels.
    pub label_spacing: f32,
    pub center_offset: CenterOffset,
    pub show_percent: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            total_time: DEFAULT_TOTAL_TIME,
            tick_spacing: DEFAULT_TICK_SPACING,
            label_spacing: DEFAULT_LABEL_SPACING,
            center_offset: CenterOffset::Live,
            show_percent: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub enabled: bool,
    pub position: LegendPosition,
    /// Width of the legend strip, which doubles as the percent toggle region.
    pub width: f32,
    pub swatch_size: f32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: LegendPosition::Left,
            width: 90.0,
            swatch_size: 8.0,
        }
    }
}

/// Panel configuration, loadable from JSON. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameStatConfig {
    pub total_time: f64,
    pub tick_spacing: f64,
    pub label_spacing: f32,
    pub show_percent: bool,
    pub legend: LegendConfig,
    /// Samples kept per phase by `FrameStats`.
    pub history_capacity: usize,
    /// Upper bound on tick marks per draw.
    pub max_ticks: usize,
}

impl Default for FrameStatConfig {
    fn default() -> Self {
        Self {
            total_time: DEFAULT_TOTAL_TIME,
            tick_spacing: DEFAULT_TICK_SPACING,
            label_spacing: DEFAULT_LABEL_SPACING,
            show_percent: false,
            legend: LegendConfig::default(),
            history_capacity: 1024,
            max_ticks: 64,
        }
    }
}

impl FrameStatConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("failed to parse frame stat config")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize frame stat config")
    }

    /// Initial view state derived from this configuration.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            total_time: self.total_time,
            tick_spacing: self.tick_spacing,
            label_spacing: self.label_spacing,
            center_offset: CenterOffset::Live,
            show_percent: self.show_percent,
        }
    }
}
