//! # reclight-adapter-midi
//!
//! MIDI adapter — opens an input port with `midir` and forwards every raw
//! message into an unbounded channel for the controller to drain.
//!
//! On unix hosts the adapter creates a *virtual* input port that the DAW
//! sends its transport control changes to; elsewhere it can connect to an
//! already existing port by name. Decoding happens downstream in the
//! domain layer — this crate moves bytes, nothing more.

pub mod error;
pub mod input;

pub use error::MidiError;
pub use input::MidiListener;
