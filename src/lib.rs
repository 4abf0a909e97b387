//! gpui_frame_stats: a GPUI panel graphing frame statistics as stacked bands

pub mod chart_view;
pub mod data_types;
pub mod error;
pub mod frame_stats;
pub mod interaction;
pub mod layout;
pub mod registry;
pub mod rendering;
pub mod scales;
pub mod stacking;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use chart_view::{init, FollowLive, FrameStatView, TogglePercent};
pub use data_types::{
    CenterOffset, FrameStatConfig, FrameStatGeometry, StatHandle, StatHistory, StatSample,
    StatSource, ViewState, VisibleWindow,
};
pub use error::FrameStatError;
pub use frame_stats::{BundleEntry, FramePhase, FrameStats, StatBundle};
pub use interaction::{DisplayMode, InteractionController, PointerMask};
pub use layout::FrameStatLayout;
pub use registry::{SeriesSlot, StatRegistry, STAT_CAPACITY};
