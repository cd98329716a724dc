use thiserror::Error;

/// Failure taxonomy shared by the record stores and the data facade.
///
/// Stores never swallow a failure: every variant is logged by the
/// facade and re-raised so the caller decides on user-visible
/// messaging. No retries happen at this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The remote backend failed: network error, non-2xx status, or a
    /// malformed response body. Carries the underlying message.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// A mutation referenced an identifier that is not in the store.
    #[error("no record with id `{id}`")]
    NotFound { id: String },

    /// A draft or partial update was rejected before dispatch.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// Reading or writing the persisted settings blob failed.
    #[error("settings persistence failed: {message}")]
    Persistence { message: String },

    /// The operation observed its cancellation token mid-flight.
    #[error("operation cancelled")]
    Cancelled,
}

impl StoreError {
    pub fn transport(message: impl Into<String>) -> Self {
        StoreError::Transport {
            message: message.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        StoreError::Validation {
            reason: reason.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        StoreError::Persistence {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
