//! TimeKeeper
//!
//! The elapsed-time counter shown while the widget is in timer mode: a
//! whole-second count starting at zero on activation, rendered as
//! zero-padded `MM:SS`, driven by a periodic tick task.
//!
//! # Tick delivery
//!
//! The ticker task does not touch the counter itself. It sends one tick
//! message per period into the controller's input queue, so counting
//! happens on the same execution context as every other state change.
//! Ticks carry the activation epoch that spawned them: a tick that was
//! already queued when its keeper was cancelled fails the epoch check and
//! is discarded, so cancellation has no observable trailing tick even
//! across an immediate re-activation.
//!
//! Deactivation aborts the tick task; `Drop` aborts as well, so a keeper
//! can never outlive the controller that owns it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Fixed tick period: the counter advances once per second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Format a whole-second count as zero-padded `MM:SS`.
///
/// Unbounded: past 99 minutes the minute field simply widens
/// (`7205` renders as `"120:05"`).
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// The elapsed-seconds counter and its tick task.
///
/// Owned by the controller; created when the display enters timer mode
/// and destroyed when it leaves. The counter state is invisible outside
/// this type.
#[derive(Debug)]
pub struct TimeKeeper {
    /// Activation epoch stamped on every tick this keeper's task sends.
    epoch: u64,
    /// Whole seconds elapsed since activation.
    seconds: u64,
    /// The periodic tick task.
    ticker: JoinHandle<()>,
}

impl TimeKeeper {
    /// Activate a keeper: counter at zero, tick task running.
    ///
    /// `tick_tx` is the controller's tick queue; one message tagged with
    /// `epoch` is sent per elapsed second until the task is aborted or
    /// the queue closes.
    #[must_use]
    pub fn activate(epoch: u64, tick_tx: mpsc::Sender<u64>) -> Self {
        let ticker = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_PERIOD);
            // The first interval tick completes immediately; the counter
            // starts at zero, so it is not a tick.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tick_tx.send(epoch).await.is_err() {
                    break;
                }
                tracing::trace!(epoch, "tick");
            }
        });

        Self {
            epoch,
            seconds: 0,
            ticker,
        }
    }

    /// The activation epoch this keeper stamps on its ticks.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whole seconds elapsed since activation.
    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Count one delivered tick.
    pub fn record_tick(&mut self) {
        self.seconds += 1;
    }

    /// The current `MM:SS` display string.
    #[must_use]
    pub fn render(&self) -> String {
        format_elapsed(self.seconds)
    }

    /// Deactivate, cancelling the tick task.
    pub fn deactivate(self) {
        self.ticker.abort();
    }
}

impl Drop for TimeKeeper {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}
