//! MIDI input — port handling and message forwarding.

use midir::{Ignore, MidiInput, MidiInputConnection};
use tokio::sync::mpsc;

use crate::error::MidiError;

/// Client name registered with the OS MIDI backend.
const CLIENT_NAME: &str = "reclight";

/// An open MIDI input connection.
///
/// Raw messages are forwarded from the backend's callback thread into the
/// returned channel; dropping the listener closes the port and thereby
/// the channel, which the controller observes as the event source ending.
pub struct MidiListener {
    // Held for its Drop side effect: closing it tears down the port.
    _connection: MidiInputConnection<()>,
    port_name: String,
}

impl MidiListener {
    /// Create a virtual input port that a DAW can target directly.
    ///
    /// # Errors
    ///
    /// Returns [`MidiError`] when the MIDI backend is unavailable or the
    /// virtual port cannot be created.
    #[cfg(unix)]
    pub fn open_virtual(
        port_name: &str,
    ) -> Result<(Self, mpsc::UnboundedReceiver<Vec<u8>>), MidiError> {
        use midir::os::unix::VirtualInput as _;

        let mut midi_in = MidiInput::new(CLIENT_NAME)?;
        midi_in.ignore(Ignore::None);

        let (tx, rx) = mpsc::unbounded_channel();
        let connection = midi_in
            .create_virtual(port_name, move |_timestamp, message, _| {
                // Receiver gone means we are shutting down; nothing to do.
                let _ = tx.send(message.to_vec());
            }, ())
            .map_err(|err| MidiError::Connect(err.kind()))?;

        tracing::info!(port = port_name, "created virtual MIDI input port");
        Ok((
            Self {
                _connection: connection,
                port_name: port_name.to_string(),
            },
            rx,
        ))
    }

    /// Connect to an existing input port whose name contains `port_name`.
    ///
    /// # Errors
    ///
    /// Returns [`MidiError::PortNotFound`] when no port matches, or a
    /// backend error when connecting fails.
    pub fn connect_by_name(
        port_name: &str,
    ) -> Result<(Self, mpsc::UnboundedReceiver<Vec<u8>>), MidiError> {
        let mut midi_in = MidiInput::new(CLIENT_NAME)?;
        midi_in.ignore(Ignore::None);

        let ports = midi_in.ports();
        let port = ports
            .iter()
            .find(|p| {
                midi_in
                    .port_name(p)
                    .is_ok_and(|name| name.contains(port_name))
            })
            .ok_or_else(|| MidiError::PortNotFound {
                name: port_name.to_string(),
            })?;

        let (tx, rx) = mpsc::unbounded_channel();
        let connection = midi_in
            .connect(port, CLIENT_NAME, move |_timestamp, message, _| {
                let _ = tx.send(message.to_vec());
            }, ())
            .map_err(|err| MidiError::Connect(err.kind()))?;

        tracing::info!(port = port_name, "connected to MIDI input port");
        Ok((
            Self {
                _connection: connection,
                port_name: port_name.to_string(),
            },
            rx,
        ))
    }

    /// The name of the port this listener is attached to.
    #[must_use]
    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}
