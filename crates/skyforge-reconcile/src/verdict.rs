//! Existence verdicts.

use skyforge_provider::{ErrorCategory, RemoteResource};
use std::fmt;

/// The tri-state result of probing a qualified name.
///
/// `Unknown` is decided like `NotFound` (fail-open) but keeps the failure
/// reason so the audit trail can distinguish a degraded decision from a
/// genuine absence.
#[derive(Debug, Clone)]
pub enum ExistenceVerdict {
    /// The provider returned a record for the name.
    Found(RemoteResource),
    /// The provider positively reported the name as absent.
    NotFound,
    /// The probe failed for a reason other than absence.
    Unknown {
        /// Human-readable failure detail, for operator visibility.
        reason: String,
        /// Failure category of the underlying provider error.
        category: ErrorCategory,
    },
}

impl ExistenceVerdict {
    /// Returns `true` if the resource was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns `true` if the verdict is degraded (probe failed).
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// The found record, if any.
    #[must_use]
    pub fn record(&self) -> Option<&RemoteResource> {
        match self {
            Self::Found(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for ExistenceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(_) => write!(f, "found"),
            Self::NotFound => write!(f, "not_found"),
            Self::Unknown { .. } => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_predicates() {
        let found = ExistenceVerdict::Found(RemoteResource::new("arn:1", "/dev/app/x"));
        assert!(found.is_found());
        assert!(!found.is_unknown());
        assert!(found.record().is_some());

        let unknown = ExistenceVerdict::Unknown {
            reason: "access denied".into(),
            category: ErrorCategory::AccessControl,
        };
        assert!(unknown.is_unknown());
        assert!(unknown.record().is_none());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(ExistenceVerdict::NotFound.to_string(), "not_found");
    }
}
