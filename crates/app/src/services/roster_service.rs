//! Roster service — runs discovery passes and matches units to the roster.

use std::net::IpAddr;

use reclight_domain::device::HardwareId;
use reclight_domain::time::now;

use crate::SharedRoster;
use crate::ports::{Discovery, DiscoveryError};

/// Result of one discovery/match pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Number of roster entries that now have an address.
    pub matched: usize,
    /// Labels of entries no discovery answer matched. Reported here, at
    /// discovery time — fan-out later skips them silently.
    pub missing: Vec<String>,
}

/// Application service that keeps the shared roster resolved.
pub struct RosterService<D> {
    discovery: D,
    roster: SharedRoster,
}

impl<D: Discovery> RosterService<D> {
    /// Create a service resolving `roster` through `discovery`.
    pub fn new(discovery: D, roster: SharedRoster) -> Self {
        Self { discovery, roster }
    }

    /// Run one discovery pass and apply it to the roster.
    ///
    /// Entries found get their address set (or updated); entries this
    /// pass omits lose theirs and stay eligible for the next pass.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] when the pass itself fails — matching
    /// fewer devices than declared is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> Result<RefreshSummary, DiscoveryError> {
        tracing::info!("discovering devices on the network");
        let units = self.discovery.discover().await?;
        tracing::info!(found = units.len(), "discovery pass finished");

        let pairs: Vec<(HardwareId, IpAddr)> = units
            .into_iter()
            .map(|u| (u.hardware_id, u.addr))
            .collect();

        let mut roster = self.roster.write().await;
        roster.apply_discovery(pairs.iter().map(|(id, addr)| (id, *addr)), now());

        for device in roster.resolved() {
            tracing::info!(
                device = %device.label,
                location = %device.location,
                addr = ?device.addr,
                "matched device"
            );
        }

        let missing: Vec<String> = roster.unresolved().map(|d| d.label.clone()).collect();
        if !missing.is_empty() {
            tracing::warn!(count = missing.len(), "could not find some devices");
            for label in &missing {
                tracing::warn!(device = %label, "not found on the network");
            }
        }

        Ok(RefreshSummary {
            matched: roster.resolved().count(),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::future::Future;
    use std::sync::Arc;

    use reclight_domain::device::{Device, DeviceKind};
    use reclight_domain::roster::Roster;

    use crate::ports::DiscoveredUnit;

    struct FixedDiscovery {
        units: Vec<DiscoveredUnit>,
    }

    impl Discovery for FixedDiscovery {
        fn discover(
            &self,
        ) -> impl Future<Output = Result<Vec<DiscoveredUnit>, DiscoveryError>> + Send {
            let units = self.units.clone();
            async { Ok(units) }
        }
    }

    struct FailingDiscovery;

    impl Discovery for FailingDiscovery {
        fn discover(
            &self,
        ) -> impl Future<Output = Result<Vec<DiscoveredUnit>, DiscoveryError>> + Send {
            async { Err(DiscoveryError::Timeout) }
        }
    }

    fn shared_roster(ids: &[&str]) -> SharedRoster {
        let entries = ids
            .iter()
            .map(|id| Device::new(*id, format!("Lamp {id}"), "studio", DeviceKind::Outlet))
            .collect();
        Arc::new(tokio::sync::RwLock::new(Roster::new(entries).unwrap()))
    }

    fn unit(id: &str, last: u8) -> DiscoveredUnit {
        DiscoveredUnit {
            hardware_id: HardwareId::new(id),
            addr: IpAddr::from([10, 0, 0, last]),
        }
    }

    #[tokio::test]
    async fn should_match_discovered_units_to_roster_entries() {
        let roster = shared_roster(&["A", "B"]);
        let service = RosterService::new(
            FixedDiscovery {
                units: vec![unit("A", 1)],
            },
            Arc::clone(&roster),
        );

        let summary = service.refresh().await.unwrap();

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.missing, vec!["Lamp B".to_string()]);
        assert_eq!(roster.read().await.resolved().count(), 1);
    }

    #[tokio::test]
    async fn should_report_all_missing_when_nothing_answers() {
        let roster = shared_roster(&["A", "B"]);
        let service = RosterService::new(FixedDiscovery { units: vec![] }, roster);

        let summary = service.refresh().await.unwrap();

        assert_eq!(summary.matched, 0);
        assert_eq!(summary.missing.len(), 2);
    }

    #[tokio::test]
    async fn should_clear_stale_addresses_between_passes() {
        let roster = shared_roster(&["A"]);
        let first = RosterService::new(
            FixedDiscovery {
                units: vec![unit("A", 1)],
            },
            Arc::clone(&roster),
        );
        first.refresh().await.unwrap();
        assert_eq!(roster.read().await.resolved().count(), 1);

        let second = RosterService::new(FixedDiscovery { units: vec![] }, Arc::clone(&roster));
        let summary = second.refresh().await.unwrap();

        assert_eq!(summary.matched, 0);
        assert_eq!(roster.read().await.resolved().count(), 0);
    }

    #[tokio::test]
    async fn should_propagate_discovery_failure() {
        let roster = shared_roster(&["A"]);
        let service = RosterService::new(FailingDiscovery, roster);

        let result = service.refresh().await;
        assert!(matches!(result, Err(DiscoveryError::Timeout)));
    }
}
