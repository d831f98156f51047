//! Roster — the fixed set of declared devices and their resolved addresses.

use std::collections::HashSet;
use std::net::IpAddr;

use crate::device::{Device, HardwareId};
use crate::error::ValidationError;
use crate::time::Timestamp;

/// The device roster.
///
/// The entry set is fixed at startup — discovery only ever mutates the
/// network address (and `last_seen`) of existing entries. A discovery
/// pass that omits a previously resolved device clears its address, so
/// fan-out stops dispatching to it until a later pass finds it again.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<Device>,
}

impl Roster {
    /// Build a roster from declared devices, enforcing invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the roster is empty, a label or
    /// hardware id is empty, or two entries share a hardware id.
    pub fn new(entries: Vec<Device>) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        let mut seen = HashSet::new();
        for device in &entries {
            if device.hardware_id.is_empty() {
                return Err(ValidationError::EmptyHardwareId {
                    label: device.label.clone(),
                });
            }
            if device.label.is_empty() {
                return Err(ValidationError::EmptyLabel {
                    hardware_id: device.hardware_id.to_string(),
                });
            }
            if !seen.insert(device.hardware_id.clone()) {
                return Err(ValidationError::DuplicateHardwareId {
                    hardware_id: device.hardware_id.to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Apply a discovery pass: set the address of every entry present in
    /// `resolved`, and clear the address of every entry that is not.
    ///
    /// Identities in `resolved` that match no roster entry are ignored —
    /// unknown hardware on the network is not our concern.
    pub fn apply_discovery<'a, I>(&mut self, resolved: I, seen_at: Timestamp)
    where
        I: IntoIterator<Item = (&'a HardwareId, IpAddr)>,
    {
        for entry in &mut self.entries {
            entry.addr = None;
        }
        for (hardware_id, addr) in resolved {
            if let Some(entry) = self
                .entries
                .iter_mut()
                .find(|e| e.hardware_id == *hardware_id)
            {
                entry.addr = Some(addr);
                entry.last_seen = Some(seen_at);
            }
        }
    }

    /// All roster entries, resolved or not.
    #[must_use]
    pub fn entries(&self) -> &[Device] {
        &self.entries
    }

    /// Entries that currently have a network address.
    pub fn resolved(&self) -> impl Iterator<Item = &Device> {
        self.entries.iter().filter(|d| d.is_resolved())
    }

    /// Entries that discovery has not (or no longer) matched.
    pub fn unresolved(&self) -> impl Iterator<Item = &Device> {
        self.entries.iter().filter(|d| !d.is_resolved())
    }
}
