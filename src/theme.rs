use gpui::*;

#[derive(Clone, Debug)]
pub struct FrameStatTheme {
    pub background: Hsla,
    pub grid_line: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: Pixels,
    pub legend_background: Hsla,
    pub legend_label: Hsla,
    pub legend_label_size: Pixels,
    /// Opacity of the band fill; the band outline is drawn fully opaque.
    pub band_fill_alpha: f32,
    pub band_line_width: Pixels,
}

impl Default for FrameStatTheme {
    fn default() -> Self {
        Self {
            background: gpui::black().alpha(0.85),
            grid_line: gpui::white().alpha(0.1),
            axis_line: gpui::white().alpha(0.2),
            axis_label: gpui::white().alpha(0.8),
            axis_label_size: px(10.0),
            legend_background: gpui::black().alpha(0.6),
            legend_label: gpui::white(),
            legend_label_size: px(10.0),
            band_fill_alpha: 0.6,
            band_line_width: px(1.0),
        }
    }
}
