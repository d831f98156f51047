//! Actuation fan-out — concurrent per-device dispatch with failure isolation.

use std::future::Future;
use std::net::IpAddr;
use std::time::Duration;

use tokio::task::JoinSet;

use reclight_domain::device::HardwareId;

use crate::SharedRoster;
use crate::debounce::ActuationSink;
use crate::ports::{ActuateError, Actuator};

/// Upper bound on a single device command, so a fan-out completes in
/// bounded time even when a device is unreachable.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(3);

/// Outcome of one device command within a fan-out.
#[derive(Debug)]
pub struct DeviceOutcome {
    /// Which device this outcome belongs to.
    pub hardware_id: HardwareId,
    /// The device's label, for reporting.
    pub label: String,
    /// Success, or why this one device failed.
    pub result: Result<(), ActuateError>,
}

/// Fans a target state out to every resolved roster entry concurrently.
///
/// `apply` never fails as a whole: each device's command runs in its own
/// task under its own timeout, and a failing device affects nothing but
/// its own [`DeviceOutcome`]. Unresolved entries are skipped silently —
/// they were already reported at discovery time.
pub struct LightFanout<A> {
    actuator: A,
    roster: SharedRoster,
    command_timeout: Duration,
}

impl<A> LightFanout<A>
where
    A: Actuator + Clone + Send + Sync + 'static,
{
    /// Create a fan-out over the shared roster.
    #[must_use]
    pub fn new(actuator: A, roster: SharedRoster, command_timeout: Duration) -> Self {
        Self {
            actuator,
            roster,
            command_timeout,
        }
    }

    /// Issue the on/off command to every resolved device concurrently and
    /// collect the per-device outcomes. No ordering among devices.
    pub async fn apply(&self, on: bool) -> Vec<DeviceOutcome> {
        let targets: Vec<(HardwareId, String, IpAddr)> = {
            let roster = self.roster.read().await;
            roster
                .entries()
                .iter()
                .filter_map(|d| {
                    d.addr
                        .map(|addr| (d.hardware_id.clone(), d.label.clone(), addr))
                })
                .collect()
        };

        let action = if on { "turn on" } else { "turn off" };
        tracing::info!(count = targets.len(), action, "switching recording lights");

        let mut set = JoinSet::new();
        for (hardware_id, label, addr) in targets {
            let actuator = self.actuator.clone();
            let command_timeout = self.command_timeout;
            set.spawn(async move {
                let result = match tokio::time::timeout(
                    command_timeout,
                    actuator.set_power(addr, on),
                )
                .await
                {
                    Ok(result) => result,
                    Err(_) => Err(ActuateError::Timeout),
                };
                DeviceOutcome {
                    hardware_id,
                    label,
                    result,
                }
            });
        }

        let mut outcomes = Vec::new();
        while let Some(joined) = set.join_next().await {
            let Ok(outcome) = joined else {
                continue;
            };
            match &outcome.result {
                Ok(()) => tracing::info!(device = %outcome.label, action, "command succeeded"),
                Err(err) => {
                    tracing::warn!(device = %outcome.label, action, %err, "command failed");
                }
            }
            outcomes.push(outcome);
        }
        outcomes
    }
}

impl<A> ActuationSink for LightFanout<A>
where
    A: Actuator + Clone + Send + Sync + 'static,
{
    fn fire(&self, on: bool) -> impl Future<Output = ()> + Send {
        async move {
            let _ = self.apply(on).await;
        }
    }
}
