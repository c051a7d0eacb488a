//! Per-run reconciliation context.
//!
//! A [`ReconcileRun`] owns everything one deployment run needs: the
//! resolved plan, the provider handle, the sibling-system source values,
//! and the memoized outcomes. Resources are reconciled one at a time in
//! declaration order; each key is probed and decided at most once per run
//! (repeat calls return the cached outcome). Nothing here survives the run.

use crate::decision::{ReconcileAction, decide};
use crate::export::{ExportEntry, OutputExporter};
use crate::outcome::ReconcileOutcome;
use crate::preserve::{PayloadOrigin, preserve_or_synthesize};
use crate::probe::probe_existence;
use crate::retrieve::retrieve_value;
use crate::verdict::ExistenceVerdict;
use indexmap::IndexMap;
use skyforge_config::{DeploymentPlan, ResourceSpec};
use skyforge_core::{Payload, QualifiedName, ResourceKey, StableIdentity};
use skyforge_provider::ResourceProvider;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can abort a reconciliation call.
///
/// Probe and retrieval failures never appear here; they degrade into
/// fail-open verdicts. Only asking for a key the plan does not declare is
/// an error.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The key is not declared in the deployment plan.
    #[error("Resource not declared in plan: {key}")]
    UndeclaredKey {
        /// The key that was requested.
        key: String,
    },
}

/// Result type for reconciliation operations
pub type Result<T> = std::result::Result<T, ReconcileError>;

/// Authoritative values published by sibling systems, keyed by source name.
///
/// Externally-sourced resources mirror these instead of preserving their
/// own prior value. The map is assembled by the caller after the sibling
/// stacks have produced their outputs (a data dependency, which is why
/// dependent resources reconcile after their sources).
#[derive(Debug, Clone, Default)]
pub struct SourceValues {
    values: IndexMap<String, Payload>,
}

impl SourceValues {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) the value for a source name.
    pub fn insert(&mut self, source: impl Into<String>, value: Payload) {
        self.values.insert(source.into(), value);
    }

    /// Looks up the value for a source name.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&Payload> {
        self.values.get(source)
    }
}

impl FromIterator<(String, Payload)> for SourceValues {
    fn from_iter<I: IntoIterator<Item = (String, Payload)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// One deployment run's reconciliation context.
pub struct ReconcileRun<'a> {
    plan: &'a DeploymentPlan,
    provider: &'a dyn ResourceProvider,
    sources: SourceValues,
    outcomes: IndexMap<ResourceKey, ReconcileOutcome>,
}

impl<'a> ReconcileRun<'a> {
    /// Creates a run with no source values.
    #[must_use]
    pub fn new(plan: &'a DeploymentPlan, provider: &'a dyn ResourceProvider) -> Self {
        Self::with_sources(plan, provider, SourceValues::new())
    }

    /// Creates a run with sibling-system source values.
    #[must_use]
    pub fn with_sources(
        plan: &'a DeploymentPlan,
        provider: &'a dyn ResourceProvider,
        sources: SourceValues,
    ) -> Self {
        Self {
            plan,
            provider,
            sources,
            outcomes: IndexMap::new(),
        }
    }

    /// Reconciles one declared resource.
    ///
    /// The first call for a key probes the provider and computes the
    /// outcome; repeat calls within the same run return the cached outcome
    /// without touching the provider again.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::UndeclaredKey` if the plan does not declare
    /// the key. Provider failures do not error; they degrade to fail-open
    /// `Create` outcomes.
    pub async fn reconcile(&mut self, key: &ResourceKey) -> Result<ReconcileOutcome> {
        if let Some(outcome) = self.outcomes.get(key) {
            return Ok(outcome.clone());
        }

        let plan = self.plan;
        let spec = plan.get(key).ok_or_else(|| ReconcileError::UndeclaredKey {
            key: key.to_string(),
        })?;

        let outcome = self.compute(spec).await;
        info!(
            key = %outcome.key,
            action = %outcome.action,
            stable_id = %outcome.stable_id,
            degraded = outcome.degraded,
            "Reconciled resource"
        );
        self.outcomes.insert(key.clone(), outcome.clone());
        Ok(outcome)
    }

    /// Reconciles every declared resource in declaration order, publishing
    /// each outcome to the exporter.
    ///
    /// # Errors
    ///
    /// Cannot return `UndeclaredKey` in practice since it only walks
    /// declared keys, but the signature matches [`Self::reconcile`].
    pub async fn reconcile_all(
        &mut self,
        exporter: &mut dyn OutputExporter,
    ) -> Result<Vec<ReconcileOutcome>> {
        let plan = self.plan;
        let mut outcomes = Vec::with_capacity(plan.len());
        for spec in plan.resources() {
            let outcome = self.reconcile(&spec.key).await?;
            exporter.export(ExportEntry::from_outcome(&outcome));
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Returns the cached outcome for a key, if it was reconciled this run.
    #[must_use]
    pub fn outcome(&self, key: &ResourceKey) -> Option<&ReconcileOutcome> {
        self.outcomes.get(key)
    }

    async fn compute(&self, spec: &ResourceSpec) -> ReconcileOutcome {
        let qualified = self.plan.context.qualified_name(&spec.key);
        let stable_id = StableIdentity::allocate(&spec.key);

        let verdict = probe_existence(self.provider, &qualified).await;
        let action = decide(&verdict, spec.externally_sourced);
        let degraded = verdict.is_unknown();
        if let ExistenceVerdict::Unknown { reason, .. } = &verdict {
            warn!(
                key = %spec.key,
                reason = %reason,
                "Existence unknown, proceeding as absent (degraded decision)"
            );
        }

        let effective_payload = if spec.key.kind.has_payload() {
            Some(self.resolve_payload(spec, &qualified, &verdict, action).await)
        } else {
            None
        };

        let external_id = match verdict.record() {
            Some(record) => record.external_id.clone(),
            None => qualified.to_string(),
        };

        ReconcileOutcome {
            key: spec.key.clone(),
            qualified_name: qualified,
            action,
            stable_id,
            effective_payload,
            external_id,
            degraded,
        }
    }

    async fn resolve_payload(
        &self,
        spec: &ResourceSpec,
        qualified: &QualifiedName,
        verdict: &ExistenceVerdict,
        action: ReconcileAction,
    ) -> Payload {
        match action {
            ReconcileAction::Create => {
                if spec.externally_sourced {
                    self.source_value_or_generated(spec)
                } else {
                    Payload::generated()
                }
            }
            ReconcileAction::AdoptExisting => {
                let retrieved = match verdict.record().and_then(|r| r.value.clone()) {
                    Some(value) => Some(value),
                    None => retrieve_value(self.provider, qualified).await,
                };
                let (payload, origin) =
                    preserve_or_synthesize(retrieved, spec.preserve_denylisted);
                if origin == PayloadOrigin::Synthesized {
                    info!(
                        key = %spec.key,
                        denylisted = spec.preserve_denylisted,
                        "Adopting with synthesized payload"
                    );
                }
                payload
            }
            ReconcileAction::AdoptAndOverwrite => self.source_value_or_generated(spec),
        }
    }

    fn source_value_or_generated(&self, spec: &ResourceSpec) -> Payload {
        let looked_up = spec
            .source
            .as_deref()
            .and_then(|source| self.sources.get(source));
        match looked_up {
            Some(value) => value.clone(),
            None => {
                warn!(
                    key = %spec.key,
                    source = spec.source.as_deref().unwrap_or("<unset>"),
                    "Source-of-truth value unavailable, generating default"
                );
                Payload::generated()
            }
        }
    }
}
