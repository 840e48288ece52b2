use thiserror::Error;

/// Why a queue transition did not take effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Missing or blank article id; nothing was sent.
    #[error("invalid input: article id is empty")]
    InvalidInput,
    /// The persistence service answered with a non-success status.
    #[error("update rejected ({status}): {message}")]
    RemoteRejected { status: u16, message: String },
    /// The request never completed (network, timeout, cancellation).
    #[error("update failed: {message}")]
    TransportFailure { message: String },
}

impl TransitionError {
    pub fn transport(message: impl Into<String>) -> Self {
        TransitionError::TransportFailure {
            message: message.into(),
        }
    }
}
