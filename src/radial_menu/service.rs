use crate::radial_menu::controller::{
    GestureCallbacks, GestureMenuController, HapticFeedback, NoopHaptics, ViewportProvider,
};
use crate::radial_menu::engine::SectorBounds;
use crate::radial_menu::source::{ChannelSource, Clock, PointerFrame, SystemClock};
use crate::radial_menu::state::MenuStore;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticDurations {
    pub long_press_ms: u64,
    pub selection_ms: u64,
    pub confirm_ms: u64,
}

impl Default for HapticDurations {
    fn default() -> Self {
        Self {
            long_press_ms: 50,
            selection_ms: 20,
            confirm_ms: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialMenuConfig {
    pub enabled: bool,
    pub debug_logging: bool,
    pub long_press_timeout_ms: u64,
    pub double_tap_timeout_ms: u64,
    pub poll_interval_ms: u64,
    pub touch_slop_dp: f32,
    /// Physical pixels per density-independent pixel.
    pub density: f32,
    pub dead_zone_px: f32,
    pub report_threshold_px: f32,
    pub haptics: HapticDurations,
    pub sectors: SectorBounds,
}

impl Default for RadialMenuConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug_logging: false,
            long_press_timeout_ms: 400,
            double_tap_timeout_ms: 300,
            poll_interval_ms: 50,
            touch_slop_dp: 20.0,
            density: 1.0,
            dead_zone_px: 50.0,
            report_threshold_px: 30.0,
            haptics: HapticDurations::default(),
            sectors: SectorBounds::default(),
        }
    }
}

impl RadialMenuConfig {
    pub fn touch_slop_px(&self) -> f32 {
        self.touch_slop_dp * self.density
    }
}

#[derive(Debug)]
struct WorkerHandle {
    stop_tx: Sender<()>,
    event_tx: Sender<PointerFrame>,
    join: JoinHandle<()>,
}

/// Hosts a [`GestureMenuController`] on its own thread and feeds it frames
/// pushed by the platform layer.
pub struct RadialMenuService {
    config: RadialMenuConfig,
    store: MenuStore,
    callbacks: Arc<dyn GestureCallbacks>,
    haptics: Arc<dyn HapticFeedback>,
    viewport: Arc<dyn ViewportProvider>,
    clock: Arc<dyn Clock>,
    worker: Option<WorkerHandle>,
}

impl RadialMenuService {
    pub fn new(
        store: MenuStore,
        callbacks: Arc<dyn GestureCallbacks>,
        viewport: Arc<dyn ViewportProvider>,
    ) -> Self {
        Self::new_with_backends(
            store,
            callbacks,
            viewport,
            Arc::new(NoopHaptics),
            Arc::new(SystemClock::default()),
        )
    }

    pub fn new_with_backends(
        store: MenuStore,
        callbacks: Arc<dyn GestureCallbacks>,
        viewport: Arc<dyn ViewportProvider>,
        haptics: Arc<dyn HapticFeedback>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config: RadialMenuConfig::default(),
            store,
            callbacks,
            haptics,
            viewport,
            clock,
            worker: None,
        }
    }

    pub fn config(&self) -> &RadialMenuConfig {
        &self.config
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Time base the worker measures long-press and double-tap timeouts with.
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn start(&mut self) {
        self.config.enabled = true;
        self.start_running();
    }

    pub fn stop(&mut self) {
        self.config.enabled = false;
        self.stop_running();
    }

    pub fn update_config(&mut self, config: RadialMenuConfig) {
        if self.config == config {
            return;
        }

        let enabled = config.enabled;
        let should_restart = self.worker.is_some();
        self.config = config;

        if enabled {
            if should_restart {
                self.stop_running();
            }
            self.start_running();
        } else {
            self.stop_running();
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn pointer_sender(&self) -> Option<Sender<PointerFrame>> {
        self.worker.as_ref().map(|worker| worker.event_tx.clone())
    }

    fn start_running(&mut self) {
        if self.worker.is_some() || !self.config.enabled {
            return;
        }

        let (event_tx, event_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel();

        let controller = GestureMenuController::new(
            self.config.clone(),
            self.store.clone(),
            Arc::clone(&self.callbacks),
            Arc::clone(&self.viewport),
        )
        .with_haptics(Arc::clone(&self.haptics))
        .with_clock(Arc::clone(&self.clock));

        let spawned = thread::Builder::new()
            .name("radial-menu".into())
            .spawn(move || {
                let mut controller = controller;
                let mut source = ChannelSource::new(event_rx, stop_rx);
                controller.run(&mut source);
            });
        match spawned {
            Ok(join) => {
                tracing::debug!("radial menu worker started");
                self.worker = Some(WorkerHandle {
                    stop_tx,
                    event_tx,
                    join,
                });
            }
            Err(err) => tracing::error!(?err, "failed to spawn radial menu worker"),
        }
    }

    fn stop_running(&mut self) {
        if let Some(WorkerHandle {
            stop_tx,
            event_tx,
            join,
        }) = self.worker.take()
        {
            let _ = stop_tx.send(());
            drop(stop_tx);
            drop(event_tx);
            if join.join().is_err() {
                tracing::error!("radial menu worker panicked");
            }
            tracing::debug!("radial menu worker stopped");
        }
        self.store.reset();
    }
}

impl Drop for RadialMenuService {
    fn drop(&mut self) {
        self.stop_running();
    }
}
