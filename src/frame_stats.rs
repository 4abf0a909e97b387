//! Standard bundle of per-frame timing phases.

use crate::data_types::{StatHandle, StatHistory};
use gpui::{hsla, Hsla};
use parking_lot::RwLock;
use std::sync::Arc;

/// One named source offered to `FrameStatView::setup`.
#[derive(Clone, Debug)]
pub struct BundleEntry {
    pub label: String,
    pub handle: StatHandle,
    /// `None` picks the next palette color.
    pub color: Option<Hsla>,
}

/// A collection of named statistic sources a panel can register in one go.
pub trait StatBundle {
    fn entries(&self) -> Vec<BundleEntry>;
}

/// Phases a frame's time is split into, in stacking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FramePhase {
    Idle,
    Input,
    Network,
    Physics,
    Animation,
    Render,
    Swap,
}

impl FramePhase {
    pub const ALL: [FramePhase; 7] = [
        FramePhase::Idle,
        FramePhase::Input,
        FramePhase::Network,
        FramePhase::Physics,
        FramePhase::Animation,
        FramePhase::Render,
        FramePhase::Swap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FramePhase::Idle => "Idle",
            FramePhase::Input => "Input",
            FramePhase::Network => "Network",
            FramePhase::Physics => "Physics",
            FramePhase::Animation => "Animation",
            FramePhase::Render => "Render",
            FramePhase::Swap => "Swap",
        }
    }

    pub fn color(&self) -> Hsla {
        match self {
            FramePhase::Idle => hsla(0.0, 0.0, 0.55, 1.0),
            FramePhase::Input => hsla(50.0 / 360.0, 0.8, 0.55, 1.0),
            FramePhase::Network => hsla(120.0 / 360.0, 0.6, 0.45, 1.0),
            FramePhase::Physics => hsla(210.0 / 360.0, 0.7, 0.55, 1.0),
            FramePhase::Animation => hsla(280.0 / 360.0, 0.6, 0.6, 1.0),
            FramePhase::Render => hsla(0.0, 0.7, 0.5, 1.0),
            FramePhase::Swap => hsla(30.0 / 360.0, 0.8, 0.5, 1.0),
        }
    }
}

/// Colors handed out to bundle entries that do not bring their own.
pub fn palette_color(index: usize) -> Hsla {
    const GOLDEN_RATIO_CONJUGATE: f32 = 0.618_034;
    let hue = (index as f32 * GOLDEN_RATIO_CONJUGATE).fract();
    hsla(hue, 0.65, 0.55, 1.0)
}

/// Per-phase frame time histories (milliseconds), owned by the frame loop.
pub struct FrameStats {
    phases: Vec<(FramePhase, Arc<RwLock<StatHistory>>)>,
}

impl FrameStats {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            phases: FramePhase::ALL
                .iter()
                .map(|phase| (*phase, Arc::new(RwLock::new(StatHistory::new(history_capacity)))))
                .collect(),
        }
    }

    pub fn history(&self, phase: FramePhase) -> Option<&Arc<RwLock<StatHistory>>> {
        self.phases
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, history)| history)
    }

    /// Records one frame. Phases missing from `timings` get a zero sample so
    /// every phase shares the frame's timestamp.
    pub fn record_frame(&self, time: f64, timings: &[(FramePhase, f64)]) {
        for (phase, history) in &self.phases {
            let value = timings
                .iter()
                .find(|(p, _)| p == phase)
                .map_or(0.0, |(_, v)| *v);
            history.write().push(time, value);
        }
    }

    /// Sum of all phases of the most recent frame.
    pub fn last_frame_total(&self) -> f64 {
        self.phases
            .iter()
            .filter_map(|(_, history)| history.read().latest())
            .map(|s| s.value)
            .sum()
    }
}

impl StatBundle for FrameStats {
    fn entries(&self) -> Vec<BundleEntry> {
        self.phases
            .iter()
            .map(|(phase, history)| BundleEntry {
                label: phase.label().to_string(),
                handle: StatHandle::new(history),
                color: Some(phase.color()),
            })
            .collect()
    }
}
