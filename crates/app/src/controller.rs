//! Controller — glues the input stream to the interpreter and scheduler.
//!
//! Raw MIDI bytes come in over a channel from the input adapter; each
//! message is fully processed (including any scheduler submission) before
//! the next one is read. That single-consumer discipline is what makes
//! the debounce cancel/arm sequence race-free.

use tokio::sync::mpsc;

use reclight_domain::midi::ControlChange;

use crate::debounce::{ActuationSink, DebounceScheduler};
use crate::interpreter::SignalInterpreter;

/// The event-processing flow: decode, interpret, submit.
pub struct Controller<S> {
    interpreter: SignalInterpreter,
    scheduler: DebounceScheduler<S>,
}

impl<S: ActuationSink + 'static> Controller<S> {
    /// Assemble the pipeline.
    #[must_use]
    pub fn new(interpreter: SignalInterpreter, scheduler: DebounceScheduler<S>) -> Self {
        Self {
            interpreter,
            scheduler,
        }
    }

    /// Process one raw MIDI message. Non-control-change data and
    /// non-qualifying transitions are dropped here without side effects.
    pub fn handle_message(&mut self, raw: &[u8]) {
        let Some(event) = ControlChange::decode(raw) else {
            return;
        };
        let Some(target) = self.interpreter.interpret(event) else {
            return;
        };
        self.scheduler.submit(target);
    }

    /// Drain the input channel until the sender side goes away.
    ///
    /// Returns when the channel closes (the input adapter disconnected);
    /// the caller decides whether to reconnect and call `run` again.
    pub async fn run(&mut self, events: &mut mpsc::UnboundedReceiver<Vec<u8>>) {
        while let Some(raw) = events.recv().await {
            self.handle_message(&raw);
        }
        tracing::warn!("event source closed");
    }
}
