use crate::radial_menu::controller::{
    FixedViewport, GestureCallbacks, GestureMenuController, GestureOutcome, Viewport,
};
use crate::radial_menu::engine::{Point, ScreenSize};
use crate::radial_menu::service::RadialMenuConfig;
use crate::radial_menu::source::{ManualClock, PointerFrame, ReplaySource};
use crate::radial_menu::state::MenuStore;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// A recorded pointer session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub screen: Option<ScreenSize>,
    #[serde(default)]
    pub origin: Option<Point>,
    pub frames: Vec<PointerFrame>,
}

pub fn load_trace(path: impl AsRef<Path>) -> anyhow::Result<Trace> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trace {}", path.display()))?;
    let trace = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse trace {}", path.display()))?;
    Ok(trace)
}

#[derive(Debug, Default)]
struct TracingCallbacks;

impl GestureCallbacks for TracingCallbacks {
    fn on_tap(&self) {
        tracing::info!("tap");
    }

    fn on_double_tap(&self) {
        tracing::info!("double tap");
    }

    fn on_like(&self) {
        tracing::info!("like");
    }

    fn on_share(&self) {
        tracing::info!("share");
    }

    fn on_collect(&self) {
        tracing::info!("collect");
    }
}

/// Run `trace` through a fresh controller and collect every outcome.
///
/// `fallback_screen` is used when the trace does not record its screen size.
pub fn replay_trace(
    trace: &Trace,
    config: &RadialMenuConfig,
    fallback_screen: ScreenSize,
) -> Vec<GestureOutcome> {
    let start = trace.frames.first().map(PointerFrame::uptime_ms).unwrap_or(0);
    let clock = ManualClock::new(start);
    let viewport = FixedViewport(Viewport {
        screen: trace.screen.unwrap_or(fallback_screen),
        origin: trace.origin.unwrap_or(Point::ZERO),
    });
    let mut controller = GestureMenuController::new(
        config.clone(),
        MenuStore::new(),
        Arc::new(TracingCallbacks),
        Arc::new(viewport),
    )
    .with_clock(Arc::new(clock.clone()));

    let mut source = ReplaySource::new(trace.frames.iter().cloned(), clock);
    let mut outcomes = Vec::new();
    while let Some(outcome) = controller.next_gesture(&mut source) {
        outcomes.push(outcome);
    }
    outcomes
}
