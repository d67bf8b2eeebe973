//! Display Controller
//!
//! The single-task event loop that owns [`DisplayState`] and the
//! [`TimeKeeper`] lifecycle. On [`DisplayController::run`] it:
//!
//! 1. Spawns the one-shot initial content fetch against the host.
//! 2. Consumes the update-event channel for the life of the process.
//! 3. Publishes a rendered frame whenever the visible output changes.
//!
//! # Concurrency model
//!
//! Everything that can change the display - event arrival, fetch
//! resolution, timer ticks - is delivered into this one loop, so state
//! updates are serialized without locks. The fetch result and the event
//! stream race by contract: whichever resolves later wins the text, and
//! the loop imposes no ordering between them.
//!
//! # Timer discipline
//!
//! Exactly one tick task may be live. Entering timer mode while already
//! in it keeps the running keeper (counter not reset); leaving timer mode
//! aborts the tick task before the mode-switch frame is published. Ticks
//! are epoch-tagged so one that was already queued when its keeper died
//! is discarded rather than counted against a successor.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::SendError;
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

use crate::config::FloaterConfig;
use crate::event::UpdateEvent;
use crate::host::{ContentHost, HostError};
use crate::state::{DisplayMode, DisplayState, ModeChange};
use crate::timekeeper::{format_elapsed, TimeKeeper};

/// Capacity of the internal tick queue. Ticks arrive once per second and
/// are drained immediately; a small buffer absorbs scheduling jitter.
const TICK_QUEUE_CAPACITY: usize = 8;

/// The host-facing side of a controller: push events in, watch frames out.
///
/// Cloneable; every clone pushes into the same controller. The
/// controller's run loop ends once every event sender (this handle and
/// anything cloned from [`FloaterHandle::events`]) is gone.
#[derive(Clone, Debug)]
pub struct FloaterHandle {
    events: mpsc::Sender<UpdateEvent>,
    frames: watch::Receiver<String>,
}

impl FloaterHandle {
    /// Push an update event at the widget.
    ///
    /// Fails only when the controller is gone; per the host contract
    /// there is no acknowledgement beyond that.
    pub async fn push(&self, event: UpdateEvent) -> Result<(), SendError<UpdateEvent>> {
        self.events.send(event).await
    }

    /// A sender for the update-event channel, for handing to a transport.
    #[must_use]
    pub fn events(&self) -> mpsc::Sender<UpdateEvent> {
        self.events.clone()
    }

    /// Subscribe to rendered frames.
    ///
    /// The receiver always holds the current frame; a change notification
    /// fires exactly when the visible output changes.
    #[must_use]
    pub fn frames(&self) -> watch::Receiver<String> {
        self.frames.clone()
    }

    /// The frame currently on display.
    #[must_use]
    pub fn current_frame(&self) -> String {
        self.frames.borrow().clone()
    }
}

/// The display controller.
///
/// Construct one per widget process with [`DisplayController::new`],
/// hand the returned [`FloaterHandle`] to whatever feeds events, and
/// drive the controller with [`DisplayController::run`].
pub struct DisplayController<H: ContentHost> {
    /// Configuration.
    config: FloaterConfig,
    /// The host to fetch initial content from.
    host: Arc<H>,
    /// Current display state.
    state: DisplayState,
    /// Live timekeeper; `Some` exactly while the mode is `Timer`.
    timekeeper: Option<TimeKeeper>,
    /// Activation epoch of the most recent timekeeper.
    epoch: u64,
    /// Update events from the host. Consumed by `run`.
    event_rx: Option<mpsc::Receiver<UpdateEvent>>,
    /// Tick sender cloned into each timekeeper.
    tick_tx: mpsc::Sender<u64>,
    /// Tick delivery queue. Consumed by `run`.
    tick_rx: Option<mpsc::Receiver<u64>>,
    /// Rendered frame output.
    frames: watch::Sender<String>,
}

impl<H: ContentHost + 'static> DisplayController<H> {
    /// Create a controller and the handle its host feeds.
    pub fn new(host: H, config: FloaterConfig) -> (Self, FloaterHandle) {
        let (event_tx, event_rx) = mpsc::channel(config.event_capacity);
        let (tick_tx, tick_rx) = mpsc::channel(TICK_QUEUE_CAPACITY);
        let state = DisplayState::new(config.placeholder.clone());
        let (frames, frames_rx) = watch::channel(state.text().to_string());

        let controller = Self {
            config,
            host: Arc::new(host),
            state,
            timekeeper: None,
            epoch: 0,
            event_rx: Some(event_rx),
            tick_tx,
            tick_rx: Some(tick_rx),
            frames,
        };

        let handle = FloaterHandle {
            events: event_tx,
            frames: frames_rx,
        };

        (controller, handle)
    }

    /// Run the controller until the event channel closes.
    ///
    /// Initiates the startup fetch, then processes events, fetch
    /// resolution, and timer ticks in arrival order per source. Returns
    /// (after tearing down any live timekeeper) only when every event
    /// sender has been dropped - the subscription itself never
    /// terminates.
    pub async fn run(mut self) {
        let (Some(mut event_rx), Some(mut tick_rx)) =
            (self.event_rx.take(), self.tick_rx.take())
        else {
            return;
        };
        let mut fetch_rx = self.spawn_fetch();

        info!(placeholder = %self.config.placeholder, "display controller started");

        loop {
            tokio::select! {
                maybe_event = event_rx.recv() => match maybe_event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
                Some(result) = fetch_rx.recv() => self.handle_fetch(result),
                Some(epoch) = tick_rx.recv() => self.handle_tick(epoch),
            }
        }

        if let Some(keeper) = self.timekeeper.take() {
            keeper.deactivate();
        }
        info!("display controller stopped");
    }

    /// Spawn the one-shot initial content fetch.
    ///
    /// Single attempt, no timeout, no retry: the resolution (or failure)
    /// is delivered into the run loop whenever it happens to land.
    fn spawn_fetch(&self) -> mpsc::Receiver<Result<String, HostError>> {
        let (fetch_tx, fetch_rx) = mpsc::channel(1);
        let host = Arc::clone(&self.host);
        tokio::spawn(async move {
            let result = host.initial_content().await;
            // The controller may be gone by now; nothing to do then.
            let _ = fetch_tx.send(result).await;
        });
        fetch_rx
    }

    /// Apply an update event and reconcile the timekeeper with the mode.
    fn handle_event(&mut self, event: UpdateEvent) {
        debug!(?event, "update event");
        match self.state.apply(&event) {
            ModeChange::EnteredTimer => {
                self.epoch += 1;
                self.timekeeper = Some(TimeKeeper::activate(self.epoch, self.tick_tx.clone()));
            }
            ModeChange::LeftTimer => {
                if let Some(keeper) = self.timekeeper.take() {
                    keeper.deactivate();
                }
            }
            ModeChange::Unchanged => {}
        }
        self.publish();
    }

    /// Apply the startup-fetch resolution.
    fn handle_fetch(&mut self, result: Result<String, HostError>) {
        match result {
            Ok(content) => {
                // Last writer wins: a fetch resolving after events were
                // applied still replaces the text, never the mode.
                if self.state.prime(content) {
                    debug!("initial content applied");
                    self.publish();
                } else {
                    debug!("initial content empty, keeping placeholder");
                }
            }
            Err(e) => {
                warn!(error = %e, "initial content fetch failed, keeping placeholder");
            }
        }
    }

    /// Count a delivered tick, discarding stale or post-cancellation ones.
    fn handle_tick(&mut self, epoch: u64) {
        let Some(keeper) = self.timekeeper.as_mut() else {
            trace!(epoch, "tick after deactivation, discarded");
            return;
        };
        if keeper.epoch() != epoch {
            trace!(epoch, live = keeper.epoch(), "stale tick, discarded");
            return;
        }
        keeper.record_tick();
        self.publish();
    }

    /// The render rule: a pure function of the current state.
    fn render(&self) -> String {
        match self.state.mode() {
            DisplayMode::Timer => match &self.timekeeper {
                // A keeper exists whenever the mode is Timer.
                Some(keeper) => keeper.render(),
                None => format_elapsed(0),
            },
            DisplayMode::Static => self.state.text().to_string(),
        }
    }

    /// Publish the current frame if the visible output changed.
    fn publish(&self) {
        let next = self.render();
        self.frames.send_if_modified(|frame| {
            if *frame == next {
                false
            } else {
                *frame = next;
                true
            }
        });
    }
}
