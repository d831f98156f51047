//! Signal interpreter — control-change events to light target decisions.
//!
//! The interpreter owns the transport state and maps each qualifying
//! control-change event to at most one target submission. It performs no
//! IO itself; the caller forwards the returned target to the
//! [`DebounceScheduler`](crate::debounce::DebounceScheduler).

use reclight_domain::midi::ControlChange;
use reclight_domain::transport::TransportState;

/// The two control signals the controller listens for.
///
/// Control numbers outside this closed set are ignored without side
/// effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlSignal {
    /// Transport play/stop.
    Play,
    /// Record arm/disarm.
    Record,
}

/// Interprets control-change events and derives light targets.
#[derive(Debug)]
pub struct SignalInterpreter {
    state: TransportState,
    cc_play: u8,
    cc_record: u8,
}

impl SignalInterpreter {
    /// Create an interpreter listening on the given control numbers.
    /// State starts as stopped and disarmed.
    #[must_use]
    pub fn new(cc_play: u8, cc_record: u8) -> Self {
        Self {
            state: TransportState::default(),
            cc_play,
            cc_record,
        }
    }

    /// Snapshot of the current transport state.
    #[must_use]
    pub fn state(&self) -> TransportState {
        self.state
    }

    fn classify(&self, controller: u8) -> Option<ControlSignal> {
        if controller == self.cc_play {
            Some(ControlSignal::Play)
        } else if controller == self.cc_record {
            Some(ControlSignal::Record)
        } else {
            None
        }
    }

    /// Process one control-change event.
    ///
    /// Returns `Some(target)` when the event warrants a (debounced) light
    /// change, `None` otherwise. Arming the record flag while the
    /// transport is stopped deliberately returns `None`: the lights wait
    /// for playback to start.
    pub fn interpret(&mut self, event: ControlChange) -> Option<bool> {
        let signal = self.classify(event.controller)?;
        let on = event.is_on();

        match signal {
            ControlSignal::Play => {
                self.state.playing = on;
                tracing::debug!(playing = on, "play state changed");
                if self.state.record_armed {
                    return Some(self.state.lights_on());
                }
            }
            ControlSignal::Record => {
                self.state.record_armed = on;
                tracing::debug!(record_armed = on, "record state changed");
                if self.state.playing {
                    return Some(self.state.lights_on());
                }
                if on {
                    tracing::info!("record armed - lights will turn on when playback starts");
                }
            }
        }
        None
    }
}
