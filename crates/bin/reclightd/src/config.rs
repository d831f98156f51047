//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `reclight.toml` in the working directory. Every setting has a
//! sensible default except the device roster, which must be declared —
//! a missing or malformed roster aborts before the event loop starts.
//! Environment variables take precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use reclight_domain::device::{Device, DeviceKind};
use reclight_domain::error::ValidationError;
use reclight_domain::roster::Roster;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MIDI input settings.
    pub midi: MidiConfig,
    /// Actuation settings.
    pub actuation: ActuationConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// The declared device roster.
    pub devices: Vec<DeviceEntry>,
}

/// MIDI input configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MidiConfig {
    /// Name of the input port the DAW sends control changes to.
    pub port_name: String,
    /// Control number for play/stop.
    pub cc_play: u8,
    /// Control number for record arm/disarm.
    pub cc_record: u8,
    /// Debounce window in milliseconds.
    pub debounce_ms: u64,
    /// Create a virtual port (unix) instead of connecting to an existing one.
    pub virtual_port: bool,
}

/// Actuation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ActuationConfig {
    /// Per-device command timeout in seconds.
    pub command_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// One `[[devices]]` roster entry. All fields are required — a device
/// declared without them is a configuration error, not a warning.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceEntry {
    /// Human-readable name.
    pub label: String,
    /// Physical location label.
    pub location: String,
    /// Hardware kind (`outlet` or `bulb`).
    pub kind: DeviceKind,
    /// Vendor-assigned identifier used for discovery matching.
    pub hardware_id: String,
}

impl Config {
    /// Load configuration from `reclight.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("reclight.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RECLIGHT_PORT_NAME") {
            self.midi.port_name = val;
        }
        if let Ok(val) = std::env::var("RECLIGHT_CC_PLAY")
            && let Ok(cc) = val.parse()
        {
            self.midi.cc_play = cc;
        }
        if let Ok(val) = std::env::var("RECLIGHT_CC_RECORD")
            && let Ok(cc) = val.parse()
        {
            self.midi.cc_record = cc;
        }
        if let Ok(val) = std::env::var("RECLIGHT_DEBOUNCE_MS")
            && let Ok(ms) = val.parse()
        {
            self.midi.debounce_ms = ms;
        }
        if let Ok(val) = std::env::var("RECLIGHT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.midi.cc_play == self.midi.cc_record {
            return Err(ConfigError::Validation(
                "cc_play and cc_record must differ".to_string(),
            ));
        }
        if self.midi.port_name.is_empty() {
            return Err(ConfigError::Validation(
                "port_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the validated device roster from the declared entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Roster`] when the roster invariants fail
    /// (empty roster, duplicate or empty hardware ids, empty labels).
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        let entries = self
            .devices
            .iter()
            .map(|entry| {
                Device::new(
                    entry.hardware_id.as_str(),
                    entry.label.clone(),
                    entry.location.clone(),
                    entry.kind,
                )
            })
            .collect();
        Ok(Roster::new(entries)?)
    }

    /// The debounce window as a [`Duration`].
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.midi.debounce_ms)
    }

    /// The per-device command timeout as a [`Duration`].
    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.actuation.command_timeout_secs)
    }
}

impl Default for MidiConfig {
    fn default() -> Self {
        Self {
            port_name: "Recording Lights".to_string(),
            cc_play: 117,
            cc_record: 118,
            debounce_ms: 250,
            virtual_port: true,
        }
    }
}

impl Default for ActuationConfig {
    fn default() -> Self {
        Self {
            command_timeout_secs: 3,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "reclightd=info,reclight=info".to_string(),
        }
    }
}

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// The device roster failed its invariants.
    #[error("invalid device roster")]
    Roster(#[from] ValidationError),
}
