//! Transform helper for coordinate projection

use crate::scales::ChartScale;
use crate::utils::PixelsExt;
use gpui::*;

/// Maps (time, value) pairs into the graph rectangle.
///
/// x grows with time; y is flipped so that value 0 sits on the bottom edge.
#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub bounds: Bounds<Pixels>,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, bounds: Bounds<Pixels>) -> Self {
        Self {
            x_scale,
            y_scale,
            bounds,
        }
    }

    /// Builds the transform for a time window and a value range `[0, value_max]`.
    pub fn for_window(
        time_domain: (f64, f64),
        value_max: f64,
        bounds: Bounds<Pixels>,
    ) -> Self {
        let width = bounds.size.width.as_f32().max(0.0);
        let height = bounds.size.height.as_f32().max(0.0);
        Self::new(
            ChartScale::new_linear(time_domain, (0.0, width)),
            ChartScale::new_linear((0.0, value_max), (height, 0.0)),
            bounds,
        )
    }

    pub fn data_to_screen(&self, time: f64, value: f64) -> Point<Pixels> {
        Point::new(self.x_data_to_screen(time), self.y_data_to_screen(value))
    }

    pub fn screen_to_data(&self, point: Point<Pixels>) -> (f64, f64) {
        (
            self.x_scale
                .invert((point.x - self.bounds.origin.x).as_f32()),
            self.y_scale
                .invert((point.y - self.bounds.origin.y).as_f32()),
        )
    }

    pub fn x_data_to_screen(&self, time: f64) -> Pixels {
        self.bounds.origin.x + px(self.x_scale.map(time))
    }

    pub fn y_data_to_screen(&self, value: f64) -> Pixels {
        self.bounds.origin.y + px(self.y_scale.map(value))
    }
}
