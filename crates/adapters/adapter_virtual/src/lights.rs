//! Virtual lights — an in-memory actuator keyed by address.

use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::Mutex;

use reclight_app::ports::{ActuateError, Actuator};

/// A bank of simulated lights, one per address.
///
/// Every commanded address gets an on/off state; addresses can be scripted
/// to refuse commands, which is how tests exercise per-device failure
/// isolation. Share it via `Arc` to hand the same bank to the fan-out and
/// to assertions.
#[derive(Debug, Default)]
pub struct VirtualLights {
    states: Mutex<HashMap<IpAddr, bool>>,
    refusing: Mutex<HashSet<IpAddr>>,
}

impl VirtualLights {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the light at `addr` to refuse every command.
    pub fn refuse_at(&self, addr: IpAddr) {
        self.lock_refusing().insert(addr);
    }

    /// Current state of the light at `addr`, if it was ever commanded.
    #[must_use]
    pub fn is_on(&self, addr: IpAddr) -> Option<bool> {
        self.lock_states().get(&addr).copied()
    }

    /// Number of lights that have received at least one command.
    #[must_use]
    pub fn commanded_count(&self) -> usize {
        self.lock_states().len()
    }

    fn lock_states(&self) -> std::sync::MutexGuard<'_, HashMap<IpAddr, bool>> {
        self.states
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_refusing(&self) -> std::sync::MutexGuard<'_, HashSet<IpAddr>> {
        self.refusing
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Actuator for VirtualLights {
    async fn set_power(&self, addr: IpAddr, on: bool) -> Result<(), ActuateError> {
        if self.lock_refusing().contains(&addr) {
            return Err(ActuateError::Refused {
                reason: "virtual light scripted to refuse".to_string(),
            });
        }
        self.lock_states().insert(addr, on);
        Ok(())
    }
}
