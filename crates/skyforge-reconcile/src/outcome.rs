//! Reconciliation outcomes.

use crate::decision::ReconcileAction;
use skyforge_core::{Payload, QualifiedName, ResourceKey, StableIdentity};

/// The result of reconciling one logical resource.
///
/// Exactly one outcome is produced per key per run; it drives the single
/// declarative call that creates or references the resource.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// The logical key this outcome belongs to.
    pub key: ResourceKey,
    /// The fully-qualified external name.
    pub qualified_name: QualifiedName,
    /// What the deployment does about the resource.
    pub action: ReconcileAction,
    /// The construct identifier the declarative layer must reuse.
    pub stable_id: StableIdentity,
    /// The payload to declare, if the kind carries one.
    pub effective_payload: Option<Payload>,
    /// The external identifier to export. For adopted resources this is the
    /// provider's identifier (ARN); for created resources the qualified
    /// name stands in until the declarative layer materializes one.
    pub external_id: String,
    /// Whether the decision was made on a degraded (`Unknown`) verdict.
    pub degraded: bool,
}

impl ReconcileOutcome {
    /// Returns `true` if the outcome adopts an existing resource.
    #[must_use]
    pub fn adopts(&self) -> bool {
        matches!(
            self.action,
            ReconcileAction::AdoptExisting | ReconcileAction::AdoptAndOverwrite
        )
    }
}
