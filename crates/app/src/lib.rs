//! # reclight-app
//!
//! Application layer — the event-driven engine and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Actuator` — switch a resolved device on or off over the network
//!   - `Discovery` — resolve hardware identifiers to network addresses
//! - Provide the core pipeline, in processing order:
//!   - `SignalInterpreter` — control-change events → light target decisions
//!   - `DebounceScheduler` — at most one pending, cancellable delayed actuation
//!   - `LightFanout` — concurrent per-device dispatch with failure isolation
//! - Provide the roster refresh use-case (`RosterService`)
//! - Orchestrate domain objects without knowing *how* MIDI or network IO works
//!
//! ## Dependency rule
//! Depends on `reclight-domain` only (plus `tokio` for tasks and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

use std::sync::Arc;

use reclight_domain::roster::Roster;

pub mod controller;
pub mod debounce;
pub mod fanout;
pub mod interpreter;
pub mod ports;
pub mod services;

/// Roster shared between the discovery side (writes) and fan-out (reads).
///
/// Read-mostly after the initial discovery pass; fan-out takes short read
/// locks, a refresh takes the only write lock.
pub type SharedRoster = Arc<tokio::sync::RwLock<Roster>>;
