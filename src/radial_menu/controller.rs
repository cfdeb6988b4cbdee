use crate::radial_menu::engine::{
    center_angle, selection_from_drag, Point, RadialAction, ScreenSize,
};
use crate::radial_menu::service::RadialMenuConfig;
use crate::radial_menu::source::{
    Clock, PointerFrame, PointerId, PointerSource, SourceEvent, SystemClock,
};
use crate::radial_menu::state::{MenuState, MenuStore};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

pub trait HapticFeedback: Send + Sync {
    fn vibrate(&self, duration: Duration) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn vibrate(&self, _duration: Duration) -> anyhow::Result<()> {
        Ok(())
    }
}

pub trait GestureCallbacks: Send + Sync {
    fn on_tap(&self);
    fn on_double_tap(&self);
    fn on_like(&self);
    fn on_share(&self);
    fn on_collect(&self);
}

/// Where the menu host sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub screen: ScreenSize,
    /// Position of the gesture container in root coordinates.
    pub origin: Point,
}

pub trait ViewportProvider: Send + Sync {
    fn viewport(&self) -> Viewport;
}

#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub Viewport);

impl FixedViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Viewport {
            screen: ScreenSize::new(width, height),
            origin: Point::ZERO,
        })
    }
}

impl ViewportProvider for FixedViewport {
    fn viewport(&self) -> Viewport {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Tap,
    DoubleTap,
    Action(RadialAction),
    /// Long-press released without an armed action.
    Dismissed,
    /// Moved past slop and released before the long-press timeout.
    Discarded,
    /// Tracked pointer lost or input closed mid-gesture.
    Aborted,
}

enum PressPhase {
    LongPress,
    Released,
    Moved,
    Lost,
}

struct Session {
    pointer: PointerId,
    start: Point,
    down_time: u64,
}

pub struct GestureMenuController {
    config: RadialMenuConfig,
    store: MenuStore,
    callbacks: Arc<dyn GestureCallbacks>,
    haptics: Arc<dyn HapticFeedback>,
    viewport: Arc<dyn ViewportProvider>,
    clock: Arc<dyn Clock>,
    last_tap_ms: Option<u64>,
    pressed: HashSet<PointerId>,
}

impl GestureMenuController {
    pub fn new(
        config: RadialMenuConfig,
        store: MenuStore,
        callbacks: Arc<dyn GestureCallbacks>,
        viewport: Arc<dyn ViewportProvider>,
    ) -> Self {
        Self {
            config,
            store,
            callbacks,
            haptics: Arc::new(NoopHaptics),
            viewport,
            clock: Arc::new(SystemClock::default()),
            last_tap_ms: None,
            pressed: HashSet::new(),
        }
    }

    pub fn with_haptics(mut self, haptics: Arc<dyn HapticFeedback>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Process gestures until the source closes.
    pub fn run(&mut self, source: &mut dyn PointerSource) {
        while let Some(outcome) = self.next_gesture(source) {
            tracing::debug!(?outcome, "radial menu gesture finished");
        }
        self.store.reset();
    }

    /// Wait for the next pointer-down and resolve the whole gesture.
    ///
    /// Returns `None` once the source closes while no gesture is in progress.
    pub fn next_gesture(&mut self, source: &mut dyn PointerSource) -> Option<GestureOutcome> {
        let session = self.await_first_down(source)?;
        tracing::debug!(
            pointer = session.pointer.0,
            x = session.start.x,
            y = session.start.y,
            "radial menu pointer down"
        );

        let outcome = match self.await_press(source, &session) {
            PressPhase::LongPress => self.track_drag(source, &session),
            PressPhase::Released => self.resolve_tap(session.down_time),
            PressPhase::Moved => {
                tracing::debug!("moved past slop before long press, discarding");
                GestureOutcome::Discarded
            }
            PressPhase::Lost => {
                tracing::debug!("pointer lost before long press");
                GestureOutcome::Aborted
            }
        };
        Some(outcome)
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.config.poll_interval_ms.max(1))
    }

    fn observe(&mut self, frame: &PointerFrame) {
        self.pressed = frame
            .changes
            .iter()
            .filter(|change| change.pressed)
            .map(|change| change.id)
            .collect();
    }

    fn await_first_down(&mut self, source: &mut dyn PointerSource) -> Option<Session> {
        loop {
            match source.next_event(self.poll_interval()) {
                SourceEvent::Frame(frame) => {
                    let down = frame
                        .changes
                        .iter()
                        .find(|change| change.pressed && !self.pressed.contains(&change.id))
                        .copied();
                    self.observe(&frame);
                    if let Some(change) = down {
                        // Frame stamps may come from another clock; every
                        // timeout is measured against ours.
                        return Some(Session {
                            pointer: change.id,
                            start: change.position,
                            down_time: self.clock.now_ms(),
                        });
                    }
                }
                SourceEvent::Timeout => {}
                SourceEvent::Closed => return None,
            }
        }
    }

    fn await_press(&mut self, source: &mut dyn PointerSource, session: &Session) -> PressPhase {
        let slop = self.config.touch_slop_px();
        let timeout = self.config.long_press_timeout_ms;
        let mut moved = false;

        loop {
            let elapsed = self.clock.now_ms().saturating_sub(session.down_time);
            if !moved && elapsed >= timeout {
                tracing::debug!(elapsed, "radial menu long press");
                return PressPhase::LongPress;
            }

            let frame = match source.next_event(self.poll_interval()) {
                SourceEvent::Frame(frame) => frame,
                SourceEvent::Timeout => continue,
                SourceEvent::Closed => return PressPhase::Lost,
            };
            self.observe(&frame);

            let change = match frame.change(session.pointer) {
                Some(change) => *change,
                None => return PressPhase::Lost,
            };
            if !change.pressed {
                return if moved {
                    PressPhase::Moved
                } else {
                    PressPhase::Released
                };
            }
            let distance = (change.position - session.start).length();
            if distance > slop && !moved {
                moved = true;
                tracing::debug!(distance, "radial menu pointer moved past slop");
            }
        }
    }

    fn resolve_tap(&mut self, down_time: u64) -> GestureOutcome {
        let is_double = self.last_tap_ms.is_some_and(|last| {
            down_time > last && down_time - last < self.config.double_tap_timeout_ms
        });
        if is_double {
            self.last_tap_ms = None;
            self.callbacks.on_double_tap();
            GestureOutcome::DoubleTap
        } else {
            self.last_tap_ms = Some(down_time);
            self.callbacks.on_tap();
            GestureOutcome::Tap
        }
    }

    fn track_drag(&mut self, source: &mut dyn PointerSource, session: &Session) -> GestureOutcome {
        self.pulse(self.config.haptics.long_press_ms);

        let viewport = self.viewport.viewport();
        let touch_position = viewport.origin + session.start;
        let angle = center_angle(touch_position, viewport.screen);
        self.store.set(MenuState::shown_at(touch_position, angle));
        tracing::debug!(
            x = touch_position.x,
            y = touch_position.y,
            angle,
            "radial menu shown"
        );

        let mut last_position = session.start;
        let mut drag = Point::ZERO;
        let mut selection: Option<RadialAction> = None;

        let outcome = loop {
            let frame = match source.next_event(self.poll_interval()) {
                SourceEvent::Frame(frame) => frame,
                SourceEvent::Timeout => continue,
                SourceEvent::Closed => {
                    tracing::debug!("pointer input closed during radial drag");
                    break GestureOutcome::Aborted;
                }
            };
            self.observe(&frame);

            let change = match frame.change(session.pointer) {
                Some(change) => *change,
                None => {
                    tracing::debug!("pointer lost during radial drag");
                    break GestureOutcome::Aborted;
                }
            };

            drag += change.position - last_position;
            last_position = change.position;

            if !change.pressed {
                tracing::debug!(?selection, dx = drag.x, dy = drag.y, "radial menu released");
                break match selection {
                    Some(action) => {
                        self.pulse(self.config.haptics.confirm_ms);
                        self.dispatch(action);
                        GestureOutcome::Action(action)
                    }
                    None => GestureOutcome::Dismissed,
                };
            }

            if drag.length() > self.config.report_threshold_px {
                let next = selection_from_drag(
                    drag,
                    angle,
                    self.config.dead_zone_px,
                    &self.config.sectors,
                );
                if next != selection {
                    if next.is_some() {
                        self.pulse(self.config.haptics.selection_ms);
                    }
                    if self.config.debug_logging {
                        tracing::debug!(from = ?selection, to = ?next, "radial menu selection changed");
                    }
                    selection = next;
                }
                self.store.update(|state| {
                    state.drag_offset = drag;
                    state.selection = selection;
                });
            }
        };

        self.store.reset();
        outcome
    }

    fn dispatch(&self, action: RadialAction) {
        tracing::debug!(action = action.label(), "radial menu action confirmed");
        match action {
            RadialAction::Like => self.callbacks.on_like(),
            RadialAction::Share => self.callbacks.on_share(),
            RadialAction::Collect => self.callbacks.on_collect(),
        }
    }

    fn pulse(&self, duration_ms: u64) {
        if duration_ms == 0 {
            return;
        }
        if let Err(err) = self.haptics.vibrate(Duration::from_millis(duration_ms)) {
            tracing::warn!(?err, duration_ms, "haptic feedback failed");
        }
    }
}
