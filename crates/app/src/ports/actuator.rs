//! Actuator port — on/off commands to a resolved device.

use std::future::Future;
use std::net::IpAddr;

/// Why a single device command failed.
///
/// These failures are always confined to one device: fan-out records them
/// per device and never lets them abort the other commands.
#[derive(Debug, thiserror::Error)]
pub enum ActuateError {
    /// The command did not complete within the per-command timeout.
    #[error("command timed out")]
    Timeout,

    /// The device answered but rejected the command.
    #[error("device refused the command: {reason}")]
    Refused {
        /// Device-reported reason, if any.
        reason: String,
    },

    /// The device could not be reached at its resolved address.
    #[error("device unreachable")]
    Unreachable(#[from] std::io::Error),
}

/// Sends on/off commands to devices by network address.
///
/// Implementations wrap whatever wire protocol the hardware speaks; the
/// core only sees the two operations. Each call may fail independently.
pub trait Actuator {
    /// Switch the device at `addr` on (`true`) or off (`false`).
    fn set_power(
        &self,
        addr: IpAddr,
        on: bool,
    ) -> impl Future<Output = Result<(), ActuateError>> + Send;
}

impl<T: Actuator + Send + Sync> Actuator for std::sync::Arc<T> {
    fn set_power(
        &self,
        addr: IpAddr,
        on: bool,
    ) -> impl Future<Output = Result<(), ActuateError>> + Send {
        (**self).set_power(addr, on)
    }
}
