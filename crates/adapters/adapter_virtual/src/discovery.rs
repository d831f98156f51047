//! Virtual discovery — answers with a fixed set of units.

use std::net::IpAddr;

use reclight_app::ports::{DiscoveredUnit, Discovery, DiscoveryError};
use reclight_domain::roster::Roster;

/// Discovery that returns a pre-arranged set of units.
///
/// For demo runs, [`VirtualDiscovery::for_roster`] fabricates one unit per
/// roster entry so every light resolves immediately.
#[derive(Debug, Clone, Default)]
pub struct VirtualDiscovery {
    units: Vec<DiscoveredUnit>,
}

impl VirtualDiscovery {
    /// Answer with exactly these units.
    #[must_use]
    pub fn with_units(units: Vec<DiscoveredUnit>) -> Self {
        Self { units }
    }

    /// Fabricate one unit per roster entry, with addresses in `10.0.0.0/24`.
    #[must_use]
    pub fn for_roster(roster: &Roster) -> Self {
        let units = roster
            .entries()
            .iter()
            .enumerate()
            .map(|(index, device)| DiscoveredUnit {
                hardware_id: device.hardware_id.clone(),
                addr: IpAddr::from([10, 0, 0, u8::try_from(index + 1).unwrap_or(u8::MAX)]),
            })
            .collect();
        Self { units }
    }
}

impl Discovery for VirtualDiscovery {
    async fn discover(&self) -> Result<Vec<DiscoveredUnit>, DiscoveryError> {
        Ok(self.units.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use reclight_domain::device::{Device, DeviceKind, HardwareId};

    #[tokio::test]
    async fn should_answer_with_configured_units() {
        let unit = DiscoveredUnit {
            hardware_id: HardwareId::new("A"),
            addr: IpAddr::from([10, 0, 0, 7]),
        };
        let discovery = VirtualDiscovery::with_units(vec![unit.clone()]);
        assert_eq!(discovery.discover().await.unwrap(), vec![unit]);
    }

    #[tokio::test]
    async fn should_fabricate_a_unit_for_every_roster_entry() {
        let roster = Roster::new(vec![
            Device::new("A", "One", "studio", DeviceKind::Outlet),
            Device::new("B", "Two", "booth", DeviceKind::Bulb),
        ])
        .unwrap();

        let units = VirtualDiscovery::for_roster(&roster).discover().await.unwrap();

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].hardware_id, HardwareId::new("A"));
        assert_eq!(units[1].hardware_id, HardwareId::new("B"));
        assert_ne!(units[0].addr, units[1].addr);
    }
}
