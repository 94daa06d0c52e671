//! Error types for g400-config-core.

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HID device communication failure.
    #[error("HID error: {0}")]
    Hid(String),

    /// No recognized mouse found during enumeration.
    #[error("no G400 or G400s attached")]
    NotAttached,

    /// More than one mouse attached; this tool drives exactly one.
    #[error("multiple G400/G400s devices attached, only one is supported")]
    MultipleDevices,

    /// Interface enumeration did not match the expected two-interface layout.
    #[error("unexpected interface topology: {0}")]
    UnexpectedTopology(String),

    /// A symbolic setting label is not in the relevant table.
    #[error("unknown {kind} value '{label}'")]
    UnknownLabel { kind: &'static str, label: String },

    /// Feature-report reply was shorter than the protocol requires.
    #[error("short feature report: expected {expected} bytes, got {actual}")]
    ShortReport { expected: usize, actual: usize },
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
