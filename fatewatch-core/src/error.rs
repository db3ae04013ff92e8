//! Error types for the fatewatch core library.

use thiserror::Error;

/// Top-level error type for fatewatch operations.
#[derive(Error, Debug)]
pub enum FateError {
    /// Configuration could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A host collaborator failed to answer a query.
    #[error("Host collaborator error: {0}")]
    Host(String),

    /// Background work was requested outside of an async runtime.
    #[error("No async runtime available for background work")]
    NoRuntime,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by the shared tracker collaborator.
///
/// These only ever surface inside detached background tasks, where they are
/// logged and dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// The tracker connection is not established.
    #[error("Tracker is not connected")]
    NotConnected,

    /// The connected user may not modify this tracker.
    #[error("Missing write permission on tracker")]
    PermissionDenied,

    /// The tracker has no record at the given slot.
    #[error("No tracker record at slot {0}")]
    UnknownSlot(u16),

    /// Transport-level failure talking to the tracker service.
    #[error("Tracker request failed: {0}")]
    Request(String),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, FateError>;
