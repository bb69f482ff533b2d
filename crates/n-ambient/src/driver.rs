// SPDX-License-Identifier: MIT
//
// Ambient driver — a background thread that moves the light.
//
// The thread waits on a stop channel with a timeout equal to the time left
// until the next tick. Three outcomes:
//
//   Timeout       → tick the clock, publish the new context
//   Disconnected  → the driver dropped its end of the channel: exit
//   Ok(())        → explicit stop message: exit
//
// Waiting on a channel instead of sleeping means `stop()` never has to
// wait out a tick interval: dropping the sender wakes the thread at once,
// and the join that follows returns as soon as the loop exits.
//
// Publishing: every subscriber owns a `Receiver<AmbientContext>`. A
// subscriber that drops its receiver is pruned on the next publish.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use n_style::AmbientContext;

use crate::clock::Ambient;
use crate::config::{ConfigError, DriverConfig};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a driver could not be started.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to spawn ambient driver thread: {0}")]
    Spawn(#[source] io::Error),
}

// ─── Shared state ────────────────────────────────────────────────────────────

/// State visible to both the driver handle and its thread.
///
/// Lock order is `subscribers` then `current`, everywhere.
struct Shared {
    current: Mutex<AmbientContext>,
    subscribers: Mutex<Vec<Sender<AmbientContext>>>,
}

impl Shared {
    fn new(initial: AmbientContext) -> Self {
        Self {
            current: Mutex::new(initial),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    fn snapshot(&self) -> AmbientContext {
        *lock(&self.current)
    }

    fn publish(&self, ctx: AmbientContext) {
        let mut subscribers = lock(&self.subscribers);
        *lock(&self.current) = ctx;

        let before = subscribers.len();
        subscribers.retain(|tx| tx.send(ctx).is_ok());
        let pruned = before - subscribers.len();
        if pruned > 0 {
            tracing::trace!(pruned, "dropped disconnected subscribers");
        }
    }
}

/// A poisoned lock only means another thread panicked mid-update of a
/// `Copy` value or a `Vec` push; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ─── AmbientDriver ───────────────────────────────────────────────────────────

/// Owns the ticking thread and the current [`AmbientContext`].
///
/// The thread runs from [`spawn`](Self::spawn) until [`stop`](Self::stop)
/// or drop. Nothing survives a restart: a new driver starts again at the
/// configured angle.
///
/// # Example
///
/// ```no_run
/// use n_ambient::{AmbientDriver, DriverConfig};
/// use n_style::{ElevationMode, resolve};
///
/// let driver = AmbientDriver::spawn(DriverConfig::showcase())?;
/// for ctx in driver.subscribe().iter().take(30) {
///     println!("{}", resolve(ElevationMode::Raised, &ctx));
/// }
/// // Ticking stops when `driver` is dropped.
/// # Ok::<(), n_ambient::DriverError>(())
/// ```
pub struct AmbientDriver {
    /// The ticking thread. `None` once stopped.
    handle: Option<JoinHandle<()>>,
    /// Dropping this wakes and ends the thread.
    stop_tx: Option<Sender<()>>,
    shared: Arc<Shared>,
    interval: Duration,
}

impl AmbientDriver {
    /// Validate `config` and start ticking.
    ///
    /// # Errors
    ///
    /// [`DriverError::Config`] if the configuration is invalid,
    /// [`DriverError::Spawn`] if the OS refuses a new thread.
    pub fn spawn(config: DriverConfig) -> Result<Self, DriverError> {
        let config = config.validate()?;
        let ambient = Ambient::from_config(&config);
        let shared = Arc::new(Shared::new(ambient.context()));
        let interval = config.tick_interval();
        let (stop_tx, stop_rx) = mpsc::channel();

        let thread_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("ambient-driver".into())
            .spawn(move || Self::tick_loop(ambient, interval, &stop_rx, &thread_shared))
            .map_err(DriverError::Spawn)?;

        tracing::debug!(
            start_angle = config.start_angle,
            interval_ms = config.tick_interval_ms,
            "ambient driver started"
        );

        Ok(Self {
            handle: Some(handle),
            stop_tx: Some(stop_tx),
            shared,
            interval,
        })
    }

    /// Receive the current context now and every published context after.
    ///
    /// The channel disconnects when the driver stops. Subscribing to a
    /// stopped driver yields the final snapshot and nothing else.
    #[must_use]
    pub fn subscribe(&self) -> Receiver<AmbientContext> {
        let (tx, rx) = mpsc::channel();
        let mut subscribers = lock(&self.shared.subscribers);
        // Receiver is alive in this scope, so the send cannot fail.
        let _ = tx.send(self.shared.snapshot());
        if self.is_running() {
            subscribers.push(tx);
        }
        rx
    }

    /// The most recently published context.
    #[must_use]
    pub fn snapshot(&self) -> AmbientContext {
        self.shared.snapshot()
    }

    /// Whether the ticking thread is still owned by this driver.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Number of live subscriptions (as of the last publish).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.shared.subscribers).len()
    }

    /// Time between ticks.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Stop ticking and wait for the thread to exit.
    ///
    /// When this returns no further tick will fire and every subscriber's
    /// channel is disconnected. Idempotent.
    pub fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        drop(self.stop_tx.take());
        if handle.join().is_err() {
            tracing::warn!("ambient driver thread panicked");
        }
        lock(&self.shared.subscribers).clear();
        tracing::debug!(angle = self.snapshot().angle, "ambient driver stopped");
    }

    /// The thread body. Ticks on a fixed schedule until the stop channel
    /// fires or disconnects.
    fn tick_loop(
        mut ambient: Ambient,
        interval: Duration,
        stop: &Receiver<()>,
        shared: &Shared,
    ) {
        let mut deadline = Instant::now() + interval;
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            match stop.recv_timeout(wait) {
                Err(RecvTimeoutError::Timeout) => {
                    let ctx = ambient.tick();
                    tracing::trace!(angle = ctx.angle, "tick");
                    shared.publish(ctx);

                    // Fell behind by more than a tick: skip, don't burst.
                    deadline += interval;
                    let now = Instant::now();
                    if deadline < now {
                        deadline = now + interval;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }
}

impl Drop for AmbientDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
