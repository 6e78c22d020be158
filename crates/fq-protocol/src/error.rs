use thiserror::Error;

/// Failures surfaced by the admission monitor.
///
/// `Cancelled` is an expected outcome (a deadline fired while the actor was
/// still queued); `Poisoned` is a fatal environment fault — some actor
/// panicked while holding the shared lock — and is never recovered from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdmissionError {
    #[error("admission cancelled by shutdown")]
    Cancelled,

    #[error("shared admission state poisoned by a panicking actor")]
    Poisoned,
}
