//! Transport state — the two flags the DAW reports and the light rule.

/// The most recently observed transport/record flags.
///
/// Both flags reset to `false` on process start; there is no persistence.
/// Only the signal interpreter mutates this state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportState {
    /// Whether the transport is rolling.
    pub playing: bool,
    /// Whether at least one track is record-armed.
    pub record_armed: bool,
}

impl TransportState {
    /// The light rule: lights are on if and only if the transport is
    /// rolling *and* recording is armed.
    #[must_use]
    pub fn lights_on(&self) -> bool {
        self.playing && self.record_armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_both_flags_cleared() {
        let state = TransportState::default();
        assert!(!state.playing);
        assert!(!state.record_armed);
        assert!(!state.lights_on());
    }

    #[test]
    fn should_request_lights_only_when_playing_and_armed() {
        for (playing, record_armed, expected) in [
            (false, false, false),
            (true, false, false),
            (false, true, false),
            (true, true, true),
        ] {
            let state = TransportState {
                playing,
                record_armed,
            };
            assert_eq!(state.lights_on(), expected, "playing={playing} armed={record_armed}");
        }
    }
}
