//! Contract-violation error model.

use thiserror::Error;

/// A caller bug, as opposed to a modeled runtime failure.
///
/// Modeled failures travel by value as [`Failure`](crate::Failure) records.
/// Contract violations are never caught or suppressed inside the crate: the
/// aborting entry points panic with the corresponding variant so the bug
/// surfaces during development, and the non-panicking constructors return it
/// as `Err`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// The value was accessed on a failed [`FailureOr`](crate::FailureOr).
    #[error("value cannot be retrieved from a failed FailureOr")]
    InvalidStateAccess,

    /// A failure list was constructed from an empty sequence.
    #[error("a failure list must contain at least one failure")]
    EmptyFailures,
}
