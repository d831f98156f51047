//! MIDI adapter error types.

/// Errors specific to the MIDI adapter.
#[derive(Debug, thiserror::Error)]
pub enum MidiError {
    /// The MIDI backend could not be initialised at all.
    #[error("failed to initialise MIDI client")]
    Init(#[from] midir::InitError),

    /// Opening or creating the input port failed.
    #[error("failed to open MIDI input port: {0:?}")]
    Connect(midir::ConnectErrorKind),

    /// No existing input port matches the requested name.
    #[error("no MIDI input port named {name:?}")]
    PortNotFound {
        /// The name that was searched for.
        name: String,
    },
}
