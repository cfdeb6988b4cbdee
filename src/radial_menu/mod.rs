pub mod controller;
pub mod engine;
pub mod overlay;
pub mod replay;
pub mod service;
pub mod source;
pub mod state;

pub use controller::{
    FixedViewport, GestureCallbacks, GestureMenuController, GestureOutcome, HapticFeedback,
    NoopHaptics, Viewport, ViewportProvider,
};
pub use engine::{Point, RadialAction, ScreenSize, SectorBounds};
pub use overlay::{ItemMarks, OverlayLayout, OverlayMetrics};
pub use service::{HapticDurations, RadialMenuConfig, RadialMenuService};
pub use source::{
    ChannelSource, Clock, ManualClock, PointerChange, PointerFrame, PointerId, PointerSource,
    ReplaySource, SourceEvent, SystemClock,
};
pub use state::{MenuState, MenuStore};
