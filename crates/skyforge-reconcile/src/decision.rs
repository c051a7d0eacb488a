//! The reconciliation decision function.

use crate::verdict::ExistenceVerdict;
use std::fmt;

/// What today's deployment does about a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconcileAction {
    /// Declare a new resource with a fresh payload.
    Create,
    /// Reference the existing resource, preserving its value where policy
    /// allows.
    AdoptExisting,
    /// Reference the existing resource but replace its value with the
    /// authoritative source-of-truth value. Only reachable for
    /// externally-sourced resources.
    AdoptAndOverwrite,
}

impl fmt::Display for ReconcileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::AdoptExisting => write!(f, "adopt-existing"),
            Self::AdoptAndOverwrite => write!(f, "adopt-and-overwrite"),
        }
    }
}

/// Maps an existence verdict and the resource's category flags to an action.
///
/// | Verdict  | externally-sourced? | Action            |
/// |----------|---------------------|-------------------|
/// | NotFound | any                 | Create            |
/// | Found    | no                  | AdoptExisting     |
/// | Found    | yes                 | AdoptAndOverwrite |
/// | Unknown  | any                 | Create (fail-open)|
///
/// Externally-sourced resources cannot be preserved verbatim because their
/// source of truth may have rotated; everything else defaults to
/// preservation so manually-set values are never clobbered. `Unknown`
/// decides exactly like `NotFound`; the degraded audit trail lives in the
/// verdict itself, not here.
#[must_use]
pub fn decide(verdict: &ExistenceVerdict, externally_sourced: bool) -> ReconcileAction {
    match (verdict, externally_sourced) {
        (ExistenceVerdict::Found(_), false) => ReconcileAction::AdoptExisting,
        (ExistenceVerdict::Found(_), true) => ReconcileAction::AdoptAndOverwrite,
        (ExistenceVerdict::NotFound | ExistenceVerdict::Unknown { .. }, _) => {
            ReconcileAction::Create
        }
    }
}
