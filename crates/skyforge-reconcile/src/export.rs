//! Output export.
//!
//! Downstream deployment units consume `{key -> external id}` pairs. The
//! exporter is a plain sink: no decision logic lives here.

use crate::decision::ReconcileAction;
use crate::outcome::ReconcileOutcome;
use indexmap::IndexMap;
use skyforge_core::ResourceKey;
use tracing::info;

/// One exported record.
#[derive(Debug, Clone)]
pub struct ExportEntry {
    /// The logical key.
    pub key: ResourceKey,
    /// The fully-qualified external name.
    pub qualified_name: String,
    /// The stable external identifier downstream units reference.
    pub external_id: String,
    /// The action that produced this entry.
    pub action: ReconcileAction,
}

impl ExportEntry {
    /// Builds an entry from an outcome.
    #[must_use]
    pub fn from_outcome(outcome: &ReconcileOutcome) -> Self {
        Self {
            key: outcome.key.clone(),
            qualified_name: outcome.qualified_name.to_string(),
            external_id: outcome.external_id.clone(),
            action: outcome.action,
        }
    }
}

/// Sink for reconciliation results.
pub trait OutputExporter: Send {
    /// Publishes one entry. Called once per key, in reconciliation order.
    fn export(&mut self, entry: ExportEntry);
}

/// Exporter that records entries in memory, in reconciliation order.
#[derive(Debug, Default)]
pub struct MemoryExporter {
    entries: IndexMap<ResourceKey, ExportEntry>,
}

impl MemoryExporter {
    /// Creates an empty exporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the exported entry for a key.
    #[must_use]
    pub fn get(&self, key: &ResourceKey) -> Option<&ExportEntry> {
        self.entries.get(key)
    }

    /// Iterates entries in export order.
    pub fn entries(&self) -> impl Iterator<Item = &ExportEntry> {
        self.entries.values()
    }

    /// Number of exported entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing has been exported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OutputExporter for MemoryExporter {
    fn export(&mut self, entry: ExportEntry) {
        info!(
            key = %entry.key,
            external_id = %entry.external_id,
            action = %entry.action,
            "Exported resource identifier"
        );
        self.entries.insert(entry.key.clone(), entry);
    }
}
