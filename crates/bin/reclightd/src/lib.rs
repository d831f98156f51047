//! Shared pieces of the `reclightd` binaries (configuration, wiring helpers).

pub mod config;
pub mod runtime;
