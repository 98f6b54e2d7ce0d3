//! Errors returned by the FPE core.

use thiserror::Error;

/// Errors returned by the cipher and its message spaces.
///
/// `SecurityFailure` is never returned to a caller: it is raised internally
/// when the AES primitive reports a configuration error that validated
/// inputs should make unreachable, and is converted to `IllegalArgument`
/// (preserving its message) before crossing the public API boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("value is outside the message space")]
    OutsideMessageSpace,

    #[error("AES primitive configuration failure: {0}")]
    SecurityFailure(String),

    #[error("cycle-walking iteration limit exceeded")]
    IterationLimitExceeded,
}

impl Error {
    pub(crate) fn illegal(why: impl Into<String>) -> Self {
        Error::IllegalArgument(why.into())
    }

    /// Re-surface an internal `SecurityFailure` as `IllegalArgument`: a
    /// security failure indicates the cipher cannot proceed and is
    /// treated as a caller-visible argument problem rather than a
    /// distinct recoverable condition.
    pub(crate) fn surface(self) -> Self {
        match self {
            Error::SecurityFailure(why) => Error::IllegalArgument(why),
            other => other,
        }
    }
}

/// Results returned by the FPE core.
pub type Result<T> = std::result::Result<T, Error>;
