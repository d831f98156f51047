//! Debounce scheduler — at most one pending, cancellable delayed actuation.
//!
//! A DAW emits play and record-arm transitions a few milliseconds apart —
//! in either order — for what is logically one user action. Firing on
//! every raw transition would flicker the lights and send redundant
//! network traffic, so each submission arms a delayed task and any newer
//! submission supersedes it. Only the settled target of a burst ever
//! reaches fan-out.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay applied before an actuation fires, unless superseded first.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Receives the settled target once the debounce window elapses.
///
/// [`LightFanout`](crate::fanout::LightFanout) is the production
/// implementation; tests substitute spies.
pub trait ActuationSink: Send + Sync {
    /// Actuate the target state. Must not fail — per-device failures are
    /// the sink's own concern.
    fn fire(&self, on: bool) -> impl Future<Output = ()> + Send;
}

struct Pending {
    handle: JoinHandle<()>,
    /// Set by whichever side (canceller or timer) gets there first. The
    /// timer only dispatches when it wins the swap, so a superseded task
    /// can never double-fire.
    claimed: Arc<AtomicBool>,
    target: bool,
}

/// Owns the single pending-actuation slot.
///
/// `submit` must be called from the one logical event-processing flow —
/// the scheduler relies on that ordering for its cancel-then-arm
/// invariant and is deliberately not `Clone`.
pub struct DebounceScheduler<S> {
    sink: Arc<S>,
    delay: Duration,
    pending: Option<Pending>,
}

impl<S: ActuationSink + 'static> DebounceScheduler<S> {
    /// Create a scheduler that fires into `sink` after `delay`.
    #[must_use]
    pub fn new(sink: Arc<S>, delay: Duration) -> Self {
        Self {
            sink,
            delay,
            pending: None,
        }
    }

    /// Submit a new target, superseding any pending actuation.
    ///
    /// Cancellation is best-effort: a task that already claimed its fire
    /// is left to complete, one that has not is aborted before the new
    /// task is armed. Must be called within a tokio runtime.
    pub fn submit(&mut self, target: bool) {
        if let Some(previous) = self.pending.take() {
            if !previous.claimed.swap(true, Ordering::SeqCst) {
                previous.handle.abort();
                tracing::debug!(target = previous.target, "superseded pending actuation");
            }
        }

        let claimed = Arc::new(AtomicBool::new(false));
        let guard = Arc::clone(&claimed);
        let sink = Arc::clone(&self.sink);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if guard.swap(true, Ordering::SeqCst) {
                // Superseded between waking and dispatching.
                return;
            }
            sink.fire(target).await;
        });

        self.pending = Some(Pending {
            handle,
            claimed,
            target,
        });
    }
}
