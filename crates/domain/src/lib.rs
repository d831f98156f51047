//! # reclight-domain
//!
//! Pure domain model for the reclight recording-light controller.
//!
//! ## Responsibilities
//! - Foundational types: hardware identifiers, error conventions, timestamps
//! - Define **Devices** (networked indicator lights declared in the roster)
//! - Define the **Roster** (the fixed set of devices and their resolved addresses)
//! - Define **Transport state** (playing / record-armed flags and the light rule)
//! - Decode raw **MIDI control-change** triplets into typed events
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod device;
pub mod midi;
pub mod roster;
pub mod transport;
