//! Errors produced while sampling clock time.

/// Failure modes of the clock core.
///
/// Configuration and CLI layers wrap these in `anyhow` errors; the scheduler
/// matches on them to decide whether a failure is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The identifier is not in the IANA timezone database.
    InvalidTimeZone(String),
    /// The host clock could not be read right now. Retried on the next tick.
    TransientSampleFailure(String),
}

impl ClockError {
    pub fn is_transient(&self) -> bool {
        matches!(self, ClockError::TransientSampleFailure(_))
    }
}

impl std::fmt::Display for ClockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockError::InvalidTimeZone(zone) => write!(f, "Unknown timezone '{zone}'"),
            ClockError::TransientSampleFailure(reason) => {
                write!(f, "Could not sample the current time: {reason}")
            }
        }
    }
}

impl std::error::Error for ClockError {}
