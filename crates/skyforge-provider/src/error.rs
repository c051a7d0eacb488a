//! Provider error types.
//!
//! This module defines the failure taxonomy for provider lookups. The
//! reconciliation engine distinguishes only "definitely absent" from
//! "anything else went wrong", but each variant keeps enough detail for
//! the audit trail.

use std::fmt;

/// Errors that can occur during provider query operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The named resource does not exist in the target account.
    #[error("Resource not found: {name}")]
    NotFound {
        /// The qualified name that was looked up.
        name: String,
    },

    /// The caller is not permitted to see the resource.
    #[error("Access denied for {name}: {message}")]
    AccessDenied {
        /// The qualified name that was looked up.
        name: String,
        /// Provider-supplied denial detail.
        message: String,
    },

    /// The provider rejected the call due to rate limiting.
    #[error("Throttled: {message}")]
    Throttled {
        /// Provider-supplied throttling detail.
        message: String,
    },

    /// The call did not complete within the transport's deadline.
    #[error("Timeout: {message}")]
    Timeout {
        /// Description of the timed-out call.
        message: String,
    },

    /// Any other provider-side failure.
    #[error("Provider API error: {message}")]
    Api {
        /// Description of the failure.
        message: String,
    },
}

impl ProviderError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates a new `AccessDenied` error.
    #[must_use]
    pub fn access_denied(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AccessDenied {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a new `Throttled` error.
    #[must_use]
    pub fn throttled(message: impl Into<String>) -> Self {
        Self::Throttled {
            message: message.into(),
        }
    }

    /// Creates a new `Timeout` error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a new `Api` error.
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Returns `true` if this error means the resource definitely does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is an access-control denial.
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::AccessDenied { .. } => ErrorCategory::AccessControl,
            Self::Throttled { .. } | Self::Timeout { .. } => ErrorCategory::Transient,
            Self::Api { .. } => ErrorCategory::Api,
        }
    }
}

/// Categories of provider errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Resource definitely absent.
    NotFound,
    /// Access-control denial.
    AccessControl,
    /// Throttling or timeout; may succeed on a later run.
    Transient,
    /// Other provider API failure.
    Api,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::AccessControl => write!(f, "access_control"),
            Self::Transient => write!(f, "transient"),
            Self::Api => write!(f, "api"),
        }
    }
}
