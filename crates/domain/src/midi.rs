//! MIDI control-change decoding.
//!
//! The controller only cares about control-change messages on channel 1
//! (status byte `0xB0`). Everything else arriving on the same port —
//! notes, clock, other channels — is out-of-band data and is silently
//! ignored, not an error.

/// Status byte of a control-change message on channel 1.
pub const CONTROL_CHANGE_STATUS: u8 = 0xB0;

/// A decoded control-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlChange {
    /// Control number (0–127).
    pub controller: u8,
    /// Control value (0–127). Zero means "off", anything else "on".
    pub value: u8,
}

impl ControlChange {
    /// Decode a raw MIDI message into a control-change event.
    ///
    /// Returns `None` for messages that are too short or whose status byte
    /// is not [`CONTROL_CHANGE_STATUS`] — the exact byte, so control
    /// changes on other channels are ignored as well.
    #[must_use]
    pub fn decode(message: &[u8]) -> Option<Self> {
        let &[status, controller, value, ..] = message else {
            return None;
        };
        if status != CONTROL_CHANGE_STATUS {
            return None;
        }
        Some(Self { controller, value })
    }

    /// Interpret the value as a boolean: any non-zero value is "on".
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.value > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_control_change_triplet() {
        let cc = ControlChange::decode(&[0xB0, 117, 127]).unwrap();
        assert_eq!(cc.controller, 117);
        assert_eq!(cc.value, 127);
        assert!(cc.is_on());
    }

    #[test]
    fn should_treat_zero_value_as_off() {
        let cc = ControlChange::decode(&[0xB0, 118, 0]).unwrap();
        assert!(!cc.is_on());
    }

    #[test]
    fn should_treat_any_nonzero_value_as_on() {
        let cc = ControlChange::decode(&[0xB0, 118, 1]).unwrap();
        assert!(cc.is_on());
    }

    #[test]
    fn should_ignore_non_control_change_status() {
        // Note on, channel 1
        assert!(ControlChange::decode(&[0x90, 60, 100]).is_none());
    }

    #[test]
    fn should_ignore_control_change_on_other_channels() {
        // 0xB1 is a control change on channel 2
        assert!(ControlChange::decode(&[0xB1, 117, 127]).is_none());
    }

    #[test]
    fn should_ignore_short_messages() {
        assert!(ControlChange::decode(&[]).is_none());
        assert!(ControlChange::decode(&[0xB0]).is_none());
        assert!(ControlChange::decode(&[0xB0, 117]).is_none());
    }

    #[test]
    fn should_ignore_trailing_bytes() {
        let cc = ControlChange::decode(&[0xB0, 117, 127, 0xF8]).unwrap();
        assert_eq!(cc.controller, 117);
    }
}
