//! Device — a networked indicator light declared in the roster.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Stable hardware identifier assigned at manufacture.
///
/// Unlike generated UUIDs, this value comes from the device vendor and is
/// immutable for the lifetime of the hardware — it is what discovery uses
/// to match a unit on the network back to its roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardwareId(String);

impl HardwareId {
    /// Wrap a vendor-assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty (invalid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HardwareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HardwareId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HardwareId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Kind of actuator hardware. Closed set — an unrecognised kind fails
/// deserialisation, so a bad roster is rejected at load time rather than
/// at discovery-match time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// A switched smart outlet.
    Outlet,
    /// A dimmable smart bulb.
    Bulb,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outlet => f.write_str("outlet"),
            Self::Bulb => f.write_str("bulb"),
        }
    }
}

/// A roster entry: one physical light and where (if anywhere) it was last
/// seen on the network.
///
/// Entries are declared once at startup and never deleted at runtime. The
/// network address is the only mutable part — it is populated by a
/// discovery pass and cleared again when a later pass omits the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Vendor-assigned identifier used for discovery matching.
    pub hardware_id: HardwareId,
    /// Human-readable name (e.g. "Live Room Lamp").
    pub label: String,
    /// Physical location label (e.g. "control room").
    pub location: String,
    /// Hardware kind.
    pub kind: DeviceKind,
    /// Current network address, if discovery has matched this device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<IpAddr>,
    /// When discovery last matched this device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<Timestamp>,
}

impl Device {
    /// Declare a new, not-yet-resolved device.
    #[must_use]
    pub fn new(
        hardware_id: impl Into<HardwareId>,
        label: impl Into<String>,
        location: impl Into<String>,
        kind: DeviceKind,
    ) -> Self {
        Self {
            hardware_id: hardware_id.into(),
            label: label.into(),
            location: location.into(),
            kind,
            addr: None,
            last_seen: None,
        }
    }

    /// Whether discovery has resolved a network address for this device.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.addr.is_some()
    }
}
