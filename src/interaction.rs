use crate::data_types::{CenterOffset, FrameStatGeometry, LegendConfig, ViewState, VisibleWindow};
use crate::layout::PanelRegions;
use crate::utils::PixelsExt;
use crate::view_controller::ViewController;
use gpui::*;
use tracing::debug;

/// Modifier keys and pressed button accompanying a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerMask {
    pub modifiers: Modifiers,
    pub pressed_button: Option<MouseButton>,
}

impl PointerMask {
    pub fn released() -> Self {
        Self::default()
    }

    pub fn pressed(button: MouseButton) -> Self {
        Self {
            modifiers: Modifiers::default(),
            pressed_button: Some(button),
        }
    }
}

impl From<&MouseDownEvent> for PointerMask {
    fn from(event: &MouseDownEvent) -> Self {
        Self {
            modifiers: event.modifiers,
            pressed_button: Some(event.button),
        }
    }
}

impl From<&MouseMoveEvent> for PointerMask {
    fn from(event: &MouseMoveEvent) -> Self {
        Self {
            modifiers: event.modifiers,
            pressed_button: event.pressed_button,
        }
    }
}

impl From<&MouseUpEvent> for PointerMask {
    fn from(event: &MouseUpEvent) -> Self {
        Self {
            modifiers: event.modifiers,
            pressed_button: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Absolute,
    Percent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitRegion {
    /// Legend strip: a press flips the display mode.
    Toggle,
    /// Graph area: a press starts a pan.
    Graph,
    Outside,
}

/// Pan in progress: where it started and which center was shown then.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    pub anchor_x: Pixels,
    pub start_offset: CenterOffset,
    pub start_center: f64,
    pub span: f64,
}

/// Pointer state machine for one panel. Owns the view state it mutates.
///
/// Positions are panel-local (origin at the panel's top-left corner).
#[derive(Clone, Debug)]
pub struct InteractionController {
    view: ViewState,
    legend: LegendConfig,
    panel_size: Size<Pixels>,
    gesture: Option<PanGesture>,
    last_window: Option<VisibleWindow>,
    last_history: Option<(f64, f64)>,
}

impl InteractionController {
    pub fn new(view: ViewState, legend: LegendConfig) -> Self {
        Self {
            view,
            legend,
            panel_size: Size::default(),
            gesture: None,
            last_window: None,
            last_history: None,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn mode(&self) -> DisplayMode {
        if self.view.show_percent {
            DisplayMode::Percent
        } else {
            DisplayMode::Absolute
        }
    }

    pub fn is_panning(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn gesture(&self) -> Option<&PanGesture> {
        self.gesture.as_ref()
    }

    pub fn set_panel_size(&mut self, size: Size<Pixels>) {
        self.panel_size = size;
    }

    pub fn panel_size(&self) -> Size<Pixels> {
        self.panel_size
    }

    /// Remembers the window and history of the last draw; pans start from them.
    pub fn observe_layout(&mut self, geometry: &FrameStatGeometry) {
        self.last_window = Some(geometry.window);
        self.last_history = geometry.history;
    }

    pub fn toggle_percent(&mut self) {
        self.view.show_percent = !self.view.show_percent;
        debug!(show_percent = self.view.show_percent, "display mode toggled");
    }

    pub fn reset_to_live(&mut self) {
        self.gesture = None;
        self.view.center_offset = CenterOffset::Live;
    }

    fn regions(&self) -> PanelRegions {
        PanelRegions::split(Bounds::new(Point::default(), self.panel_size), &self.legend)
    }

    /// Classifies a panel-local position.
    ///
    /// The panel covers `[0, width) x [0, height)`. The toggle region is the
    /// legend strip (the boundary column belongs to the graph), or the mode
    /// badge when the legend is disabled.
    pub fn hit_test(&self, position: Point<Pixels>) -> HitRegion {
        let (x, y) = (position.x.as_f32(), position.y.as_f32());
        let width = self.panel_size.width.as_f32();
        let height = self.panel_size.height.as_f32();
        if !(x >= 0.0 && x < width && y >= 0.0 && y < height) {
            return HitRegion::Outside;
        }

        if self.regions().toggle_contains(position) {
            HitRegion::Toggle
        } else {
            HitRegion::Graph
        }
    }

    fn current_span(&self) -> f64 {
        self.last_window
            .map(|w| w.span())
            .unwrap_or_else(|| ViewController::effective_span(self.view.total_time, None))
    }

    fn current_center(&self, span: f64) -> f64 {
        match self.last_window {
            Some(window) => window.center(),
            None => ViewController::requested_center(
                self.view.center_offset,
                self.last_history.map(|(_, last)| last),
                span,
            ),
        }
    }

    pub fn handle_mouse_down(&mut self, position: Point<Pixels>, mask: PointerMask) -> bool {
        if mask.pressed_button.is_some_and(|b| b != MouseButton::Left) {
            return false;
        }
        match self.hit_test(position) {
            HitRegion::Toggle => {
                self.toggle_percent();
                true
            }
            HitRegion::Graph => {
                let span = self.current_span();
                let gesture = PanGesture {
                    anchor_x: position.x,
                    start_offset: self.view.center_offset,
                    start_center: self.current_center(span),
                    span,
                };
                debug!(anchor_x = gesture.anchor_x.as_f32(), start_center = gesture.start_center, "pan started");
                self.gesture = Some(gesture);
                true
            }
            HitRegion::Outside => false,
        }
    }

    pub fn handle_hover(&mut self, position: Point<Pixels>, mask: PointerMask) -> bool {
        let inside = self.hit_test(position) != HitRegion::Outside;
        let Some(gesture) = self.gesture else {
            return inside;
        };

        if mask.pressed_button.is_none() {
            // Button released without us seeing the mouse-up.
            debug!("pan ended without mouse up");
            self.gesture = None;
            return inside;
        }

        let delta = (position.x - gesture.anchor_x).as_f32();
        if delta == 0.0 {
            self.view.center_offset = gesture.start_offset;
            return true;
        }

        let graph_w = self.regions().graph.size.width.as_f32();
        let center = ViewController::pan_center(gesture.start_center, delta, graph_w, gesture.span);
        let (center, at_live_edge) =
            ViewController::clamp_center(center, self.last_history, gesture.span);
        self.view.center_offset = if at_live_edge {
            CenterOffset::Live
        } else {
            CenterOffset::At(center)
        };
        true
    }

    pub fn handle_mouse_up(&mut self, _position: Point<Pixels>, _mask: PointerMask) -> bool {
        if self.gesture.take().is_some() {
            debug!(center = ?self.view.center_offset, "pan ended");
            true
        } else {
            false
        }
    }
}
