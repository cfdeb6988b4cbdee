use crate::radial_menu::engine::Point;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerChange {
    pub id: PointerId,
    pub position: Point,
    pub pressed: bool,
    pub uptime_ms: u64,
}

impl PointerChange {
    pub fn new(id: u64, position: impl Into<Point>, pressed: bool, uptime_ms: u64) -> Self {
        Self {
            id: PointerId(id),
            position: position.into(),
            pressed,
            uptime_ms,
        }
    }
}

/// Every pointer the input system currently knows about. A pointer that was
/// part of an earlier frame and is absent here has been lost.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerFrame {
    pub changes: Vec<PointerChange>,
}

impl PointerFrame {
    pub fn single(change: PointerChange) -> Self {
        Self {
            changes: vec![change],
        }
    }

    pub fn change(&self, id: PointerId) -> Option<&PointerChange> {
        self.changes.iter().find(|change| change.id == id)
    }

    /// Latest timestamp carried by the frame, `0` for an empty frame.
    pub fn uptime_ms(&self) -> u64 {
        self.changes
            .iter()
            .map(|change| change.uptime_ms)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceEvent {
    Frame(PointerFrame),
    Timeout,
    Closed,
}

pub trait PointerSource {
    /// Wait at most `timeout` for the next frame.
    fn next_event(&mut self, timeout: Duration) -> SourceEvent;
}

pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

#[derive(Debug, Clone)]
pub struct SystemClock {
    epoch: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        self.now.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Live input fed by the platform layer through an mpsc channel.
///
/// Once a stop is observed the source stays closed, even while senders for
/// the event channel are still alive.
#[derive(Debug)]
pub struct ChannelSource {
    events: Receiver<PointerFrame>,
    stop: Receiver<()>,
    stopped: bool,
}

impl ChannelSource {
    pub fn new(events: Receiver<PointerFrame>, stop: Receiver<()>) -> Self {
        Self {
            events,
            stop,
            stopped: false,
        }
    }
}

impl PointerSource for ChannelSource {
    fn next_event(&mut self, timeout: Duration) -> SourceEvent {
        if self.stopped {
            return SourceEvent::Closed;
        }
        match self.stop.try_recv() {
            Ok(()) | Err(mpsc::TryRecvError::Disconnected) => {
                self.stopped = true;
                return SourceEvent::Closed;
            }
            Err(mpsc::TryRecvError::Empty) => {}
        }
        match self.events.recv_timeout(timeout) {
            Ok(frame) => SourceEvent::Frame(frame),
            Err(mpsc::RecvTimeoutError::Timeout) => SourceEvent::Timeout,
            Err(mpsc::RecvTimeoutError::Disconnected) => SourceEvent::Closed,
        }
    }
}

/// Plays back recorded frames against a [`ManualClock`].
///
/// A frame is delivered once its timestamp falls inside the wait window; the
/// clock then jumps to that timestamp. Otherwise the clock advances by the
/// full timeout. Runs out as [`SourceEvent::Closed`].
#[derive(Debug, Clone)]
pub struct ReplaySource {
    frames: VecDeque<PointerFrame>,
    clock: ManualClock,
}

impl ReplaySource {
    pub fn new(frames: impl IntoIterator<Item = PointerFrame>, clock: ManualClock) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            clock,
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl PointerSource for ReplaySource {
    fn next_event(&mut self, timeout: Duration) -> SourceEvent {
        let now = self.clock.now_ms();
        let due = match self.frames.front() {
            Some(frame) => frame.uptime_ms(),
            None => return SourceEvent::Closed,
        };
        let window_end = now.saturating_add(timeout.as_millis() as u64);
        if due > window_end {
            self.clock.set(window_end);
            return SourceEvent::Timeout;
        }
        self.clock.set(now.max(due));
        match self.frames.pop_front() {
            Some(frame) => SourceEvent::Frame(frame),
            None => SourceEvent::Closed,
        }
    }
}
