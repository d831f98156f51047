//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors with `thiserror` and converts
//! via `#[from]` where a boundary is crossed. The domain layer only knows
//! about validation failures — IO errors live in the adapter crates.

/// A roster or device failed an invariant check.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The roster contains no devices at all.
    #[error("no devices configured")]
    EmptyRoster,

    /// A device was declared without a label.
    #[error("device {hardware_id} has an empty label")]
    EmptyLabel {
        /// The offending device's hardware identifier.
        hardware_id: String,
    },

    /// A device was declared with an empty hardware identifier.
    #[error("device {label:?} has an empty hardware id")]
    EmptyHardwareId {
        /// The offending device's label.
        label: String,
    },

    /// Two roster entries share the same hardware identifier.
    #[error("duplicate hardware id {hardware_id}")]
    DuplicateHardwareId {
        /// The duplicated identifier.
        hardware_id: String,
    },
}
