use gpui::{Bounds, Hsla, Pixels, Point};

/// The time range currently mapped onto the graph width (seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleWindow {
    pub start: f64,
    pub end: f64,
}

impl VisibleWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn center(&self) -> f64 {
        self.start + self.span() / 2.0
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }
}

/// Screen geometry for one series: a filled band between `lower` and `upper`.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesBand {
    pub rank: usize,
    pub label: String,
    pub color: Hsla,
    /// Top edge of the band, one point per column.
    pub upper: Vec<Point<Pixels>>,
    /// Bottom edge of the band (top of the series stacked below it).
    pub lower: Vec<Point<Pixels>>,
    /// `(time, value)` per column after the display transform (absolute or fraction).
    pub values: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub time: f64,
    pub x: Pixels,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub rank: usize,
    pub label: String,
    pub color: Hsla,
    pub swatch: Bounds<Pixels>,
    pub label_origin: Point<Pixels>,
}

/// Everything a painter needs for one frame. Recomputed on every draw.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameStatGeometry {
    pub window: VisibleWindow,
    /// Combined first and last timestamps across all live series.
    pub history: Option<(f64, f64)>,
    pub graph_bounds: Bounds<Pixels>,
    pub legend_bounds: Bounds<Pixels>,
    /// Where a press flips percent mode; the mode label is drawn here.
    pub toggle_bounds: Bounds<Pixels>,
    pub bands: Vec<SeriesBand>,
    pub ticks: Vec<TickMark>,
    pub legend: Vec<LegendEntry>,
    /// Value mapped to the top of the graph (1.0 in percent mode).
    pub value_max: f64,
    pub show_percent: bool,
}
