// FrameStatView: the GPUI entity hosting one frame statistics panel

use crate::data_types::{FrameStatConfig, FrameStatGeometry, StatHandle, ViewState};
use crate::error::FrameStatError;
use crate::frame_stats::{palette_color, StatBundle};
use crate::interaction::{HitRegion, InteractionController, PointerMask};
use crate::layout::FrameStatLayout;
use crate::registry::StatRegistry;
use crate::rendering::{paint_bands, paint_grid, paint_legend, paint_tick_labels};
use crate::theme::FrameStatTheme;
use eyre::{Result, WrapErr};
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

actions!(gpui_frame_stats, [TogglePercent, FollowLive]);

const KEY_CONTEXT: &str = "FrameStatView";

/// Registers the default key bindings for frame stat panels.
pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("p", TogglePercent, Some(KEY_CONTEXT)),
        KeyBinding::new("end", FollowLive, Some(KEY_CONTEXT)),
    ]);
}

/// Scrolling graph of registered frame statistics with a legend.
///
/// Geometry is recomputed from the registry and the view state on every paint;
/// the view only remembers the bounds and geometry of the last paint so pointer
/// events can be mapped back to time.
pub struct FrameStatView {
    name: SharedString,
    config: FrameStatConfig,
    registry: StatRegistry,
    interaction: InteractionController,
    pub theme: FrameStatTheme,

    bounds: Rc<RefCell<Bounds<Pixels>>>,
    last_geometry: Rc<RefCell<Option<FrameStatGeometry>>>,
    focus_handle: FocusHandle,
}

impl Focusable for FrameStatView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl FrameStatView {
    pub fn new(
        name: impl Into<SharedString>,
        config: FrameStatConfig,
        cx: &mut Context<Self>,
    ) -> Self {
        let name = name.into();
        info!(name = %name, "frame stat view created");
        let interaction = InteractionController::new(config.view_state(), config.legend.clone());
        Self {
            name,
            registry: StatRegistry::new(),
            interaction,
            config,
            theme: FrameStatTheme::default(),
            bounds: Rc::new(RefCell::new(Bounds::default())),
            last_geometry: Rc::new(RefCell::new(None)),
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn name(&self) -> &SharedString {
        &self.name
    }

    pub fn config(&self) -> &FrameStatConfig {
        &self.config
    }

    pub fn registry(&self) -> &StatRegistry {
        &self.registry
    }

    pub fn view_state(&self) -> &ViewState {
        self.interaction.view_state()
    }

    pub fn view_state_mut(&mut self) -> &mut ViewState {
        self.interaction.view_state_mut()
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    /// Registers one series. The panel keeps only a weak reference to the source.
    pub fn add_stat(
        &mut self,
        handle: StatHandle,
        label: impl Into<String>,
        color: Hsla,
    ) -> std::result::Result<usize, FrameStatError> {
        self.registry.add_stat(handle, label, color)
    }

    /// Registers every entry of a bundle in order and returns how many were added.
    ///
    /// Stops at the first entry that does not fit; earlier registrations stay.
    pub fn setup(&mut self, bundle: &impl StatBundle) -> Result<usize> {
        let mut added = 0;
        for entry in bundle.entries() {
            let color = entry
                .color
                .unwrap_or_else(|| palette_color(self.registry.len()));
            let label = entry.label.clone();
            self.registry
                .add_stat(entry.handle, entry.label, color)
                .wrap_err_with(|| format!("setup of '{}' stopped at '{}'", self.name, label))?;
            added += 1;
        }
        debug!(name = %self.name, added, "frame stat bundle registered");
        Ok(added)
    }

    /// Geometry of the panel for the given bounds, from the current state.
    pub fn layout(&self, bounds: Bounds<Pixels>) -> FrameStatGeometry {
        FrameStatLayout::compute(self.interaction.view_state(), &self.registry, bounds, &self.config)
    }

    /// Feeds the last painted bounds and geometry to the interaction controller.
    fn sync_interaction(&mut self) {
        let bounds = *self.bounds.borrow();
        self.interaction.set_panel_size(bounds.size);
        if let Some(geometry) = self.last_geometry.borrow().as_ref() {
            self.interaction.observe_layout(geometry);
        }
    }

    fn to_local(&self, position: Point<Pixels>) -> Point<Pixels> {
        position - self.bounds.borrow().origin
    }

    /// Pointer press at a panel-local position. Returns whether it was consumed.
    pub fn handle_mouse_down(&mut self, position: Point<Pixels>, mask: PointerMask) -> bool {
        self.sync_interaction();
        self.interaction.handle_mouse_down(position, mask)
    }

    pub fn handle_mouse_up(&mut self, position: Point<Pixels>, mask: PointerMask) -> bool {
        self.sync_interaction();
        self.interaction.handle_mouse_up(position, mask)
    }

    pub fn handle_hover(&mut self, position: Point<Pixels>, mask: PointerMask) -> bool {
        self.sync_interaction();
        self.interaction.handle_hover(position, mask)
    }

    // --- GPUI listeners ---

    fn on_mouse_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        let local = self.to_local(event.position);
        if event.click_count >= 2 && self.interaction.hit_test(local) == HitRegion::Graph {
            self.interaction.reset_to_live();
            cx.notify();
            return;
        }
        if self.handle_mouse_down(local, PointerMask::from(event)) {
            cx.stop_propagation();
            cx.notify();
        }
    }

    fn on_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let panning = self.interaction.is_panning();
        let local = self.to_local(event.position);
        if self.handle_hover(local, PointerMask::from(event)) && panning {
            cx.notify();
        }
    }

    fn on_mouse_up(&mut self, event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let local = self.to_local(event.position);
        if self.handle_mouse_up(local, PointerMask::from(event)) {
            cx.notify();
        }
    }

    fn handle_toggle_percent(&mut self, _: &TogglePercent, _win: &mut Window, cx: &mut Context<Self>) {
        self.interaction.toggle_percent();
        cx.notify();
    }

    fn handle_follow_live(&mut self, _: &FollowLive, _win: &mut Window, cx: &mut Context<Self>) {
        self.interaction.reset_to_live();
        cx.notify();
    }
}

impl Render for FrameStatView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let bounds_rc = self.bounds.clone();
        let view = self.interaction.view_state().clone();
        let registry = self.registry.clone();
        let config = self.config.clone();
        let theme = self.theme.clone();
        let last_geometry = self.last_geometry.clone();

        let cursor = if self.interaction.is_panning() {
            CursorStyle::ClosedHand
        } else {
            CursorStyle::Arrow
        };

        div()
            .track_focus(&self.focus_handle)
            .key_context(KEY_CONTEXT)
            .size_full()
            .relative()
            .overflow_hidden()
            .bg(self.theme.background)
            .cursor(cursor)
            .on_action(cx.listener(Self::handle_toggle_percent))
            .on_action(cx.listener(Self::handle_follow_live))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_mouse_down))
            .on_mouse_move(cx.listener(Self::on_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .child(
                canvas(|_, _, _| {}, move |bounds, (), window, cx| {
                    // Everything, text included, is laid out against this paint's bounds.
                    *bounds_rc.borrow_mut() = bounds;
                    let geometry = FrameStatLayout::compute(&view, &registry, bounds, &config);
                    paint_grid(window, &geometry, &theme);
                    paint_bands(window, &geometry, &theme);
                    paint_tick_labels(window, cx, &geometry, &theme);
                    paint_legend(window, cx, &geometry, &theme);
                    *last_geometry.borrow_mut() = Some(geometry);
                })
                .size_full(),
            )
    }
}
