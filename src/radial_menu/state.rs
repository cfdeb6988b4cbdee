use crate::radial_menu::engine::{Point, RadialAction};
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// What the overlay renderer needs to draw the fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuState {
    pub visible: bool,
    pub touch_position: Point,
    pub drag_offset: Point,
    pub selection: Option<RadialAction>,
    pub center_angle: f32,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            visible: false,
            touch_position: Point::ZERO,
            drag_offset: Point::ZERO,
            selection: None,
            center_angle: 270.0,
        }
    }
}

impl MenuState {
    pub fn shown_at(touch_position: Point, center_angle: f32) -> Self {
        Self {
            visible: true,
            touch_position,
            center_angle,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
struct Versioned {
    state: MenuState,
    version: u64,
}

#[derive(Debug)]
struct MenuStoreInner {
    slot: Mutex<Versioned>,
    changed: Condvar,
}

/// Single-slot observable holder for [`MenuState`].
///
/// Owned by the screen that hosts the menu and handed to both the gesture
/// controller (the only writer) and the renderer. Every write bumps the
/// version so readers can tell frames apart.
#[derive(Debug, Clone)]
pub struct MenuStore {
    inner: Arc<MenuStoreInner>,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MenuStoreInner {
                slot: Mutex::new(Versioned {
                    state: MenuState::default(),
                    version: 0,
                }),
                changed: Condvar::new(),
            }),
        }
    }

    pub fn snapshot(&self) -> MenuState {
        match self.inner.slot.lock() {
            Ok(slot) => slot.state,
            Err(err) => {
                tracing::error!(?err, "failed to lock radial menu state");
                MenuState::default()
            }
        }
    }

    pub fn version(&self) -> u64 {
        self.inner.slot.lock().map(|slot| slot.version).unwrap_or(0)
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut MenuState),
    {
        match self.inner.slot.lock() {
            Ok(mut slot) => {
                f(&mut slot.state);
                slot.version += 1;
                self.inner.changed.notify_all();
            }
            Err(err) => tracing::error!(?err, "failed to lock radial menu state"),
        }
    }

    pub fn set(&self, state: MenuState) {
        self.update(|current| *current = state);
    }

    pub fn reset(&self) {
        self.set(MenuState::default());
    }

    /// Block until the version moves past `since` or `timeout` elapses.
    pub fn wait_for_change(&self, since: u64, timeout: Duration) -> Option<(u64, MenuState)> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.inner.slot.lock().ok()?;
        while slot.version <= since {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let (next, result) = self.inner.changed.wait_timeout(slot, remaining).ok()?;
            slot = next;
            if result.timed_out() && slot.version <= since {
                return None;
            }
        }
        Some((slot.version, slot.state))
    }
}
