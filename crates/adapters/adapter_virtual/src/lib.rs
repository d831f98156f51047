//! # reclight-adapter-virtual
//!
//! Virtual/demo adapter — simulated implementations of the actuator and
//! discovery ports, for tests and for running the daemon without real
//! hardware on the network.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `reclight-app` and `reclight-domain`.

pub mod discovery;
pub mod lights;

pub use discovery::VirtualDiscovery;
pub use lights::VirtualLights;
