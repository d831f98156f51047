//! Discovery port — resolving hardware identifiers to network addresses.

use std::future::Future;
use std::net::IpAddr;

use reclight_domain::device::HardwareId;

/// One unit found on the local network during a discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredUnit {
    /// The vendor-assigned identifier reported by the unit.
    pub hardware_id: HardwareId,
    /// Where the unit answered from.
    pub addr: IpAddr,
}

/// Why a discovery pass failed as a whole.
///
/// A pass that simply finds fewer units than the roster declares is *not*
/// an error — missing entries are reported by the roster service and
/// retried on the next pass.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// The discovery transport (broadcast socket, …) failed.
    #[error("discovery transport failed")]
    Transport(#[from] std::io::Error),

    /// The pass did not complete within its configured timeout.
    #[error("discovery timed out")]
    Timeout,
}

/// Finds actuator hardware on the local network.
pub trait Discovery {
    /// Run one discovery pass, returning every unit that answered.
    fn discover(&self) -> impl Future<Output = Result<Vec<DiscoveredUnit>, DiscoveryError>> + Send;
}
