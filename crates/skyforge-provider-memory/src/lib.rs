//! In-memory [`ResourceProvider`] backend.
//!
//! A fixture provider for tests and dry runs. Resources live in a
//! concurrent map keyed by qualified name, and individual operations can be
//! made to fail per name so the engine's degraded paths are testable.

use async_trait::async_trait;
use dashmap::DashMap;
use skyforge_core::{Payload, QualifiedName};
use skyforge_provider::{ProviderError, RemoteResource, ResourceProvider};

/// Which provider operation an injected fault applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultOp {
    /// Fail `describe` for the name.
    Describe,
    /// Fail `current_value` for the name.
    CurrentValue,
}

/// A failure to inject for one `(name, operation)` pair.
///
/// `ProviderError` itself is not `Clone`, so faults are stored as this
/// spec and materialized per call.
#[derive(Debug, Clone)]
pub enum Fault {
    /// Access-control denial with the given detail.
    AccessDenied(String),
    /// Rate-limit rejection with the given detail.
    Throttled(String),
    /// Transport deadline exceeded.
    Timeout(String),
    /// Any other provider failure.
    Api(String),
}

impl Fault {
    fn materialize(&self, name: &str) -> ProviderError {
        match self {
            Self::AccessDenied(message) => ProviderError::access_denied(name, message.clone()),
            Self::Throttled(message) => ProviderError::throttled(message.clone()),
            Self::Timeout(message) => ProviderError::timeout(message.clone()),
            Self::Api(message) => ProviderError::api(message.clone()),
        }
    }
}

/// In-memory resource-provider backend.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    resources: DashMap<String, RemoteResource>,
    faults: DashMap<(String, FaultOp), Fault>,
}

impl MemoryProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) a resource record, keyed by its name.
    pub fn insert(&self, resource: RemoteResource) {
        self.resources.insert(resource.name.clone(), resource);
    }

    /// Removes a resource record by name.
    pub fn remove(&self, name: &str) {
        self.resources.remove(name);
    }

    /// Injects a fault for one operation on one name.
    pub fn inject_fault(&self, name: impl Into<String>, op: FaultOp, fault: Fault) {
        self.faults.insert((name.into(), op), fault);
    }

    /// Clears all injected faults.
    pub fn clear_faults(&self) {
        self.faults.clear();
    }

    /// Number of resource records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns whether the provider holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    fn fault_for(&self, name: &str, op: FaultOp) -> Option<ProviderError> {
        self.faults
            .get(&(name.to_string(), op))
            .map(|fault| fault.materialize(name))
    }
}

#[async_trait]
impl ResourceProvider for MemoryProvider {
    async fn describe(
        &self,
        name: &QualifiedName,
    ) -> Result<Option<RemoteResource>, ProviderError> {
        if let Some(err) = self.fault_for(name.as_str(), FaultOp::Describe) {
            return Err(err);
        }
        Ok(self.resources.get(name.as_str()).map(|r| r.value().clone()))
    }

    async fn current_value(&self, name: &QualifiedName) -> Result<Payload, ProviderError> {
        if let Some(err) = self.fault_for(name.as_str(), FaultOp::CurrentValue) {
            return Err(err);
        }
        let record = self
            .resources
            .get(name.as_str())
            .ok_or_else(|| ProviderError::not_found(name.as_str()))?;
        record
            .value()
            .value
            .clone()
            .ok_or_else(|| ProviderError::api(format!("{name} has no retrievable value")))
    }

    async fn list_by_prefix(&self, prefix: &str) -> Result<Vec<RemoteResource>, ProviderError> {
        let mut entries: Vec<RemoteResource> = self
            .resources
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyforge_core::{DeploymentContext, ResourceKey};

    fn qualified(name: &str) -> QualifiedName {
        let ctx = DeploymentContext::new("dev", "app").unwrap();
        ctx.qualified_name(&ResourceKey::secret(name).unwrap())
    }

    #[tokio::test]
    async fn test_describe_found_and_not_found() {
        let provider = MemoryProvider::new();
        let name = qualified("db-password");
        provider.insert(
            RemoteResource::new("arn:aws:secretsmanager:db-password", name.as_str())
                .with_value(Payload::from_str_value("p@ss")),
        );

        let found = provider.describe(&name).await.unwrap();
        assert_eq!(
            found.unwrap().external_id,
            "arn:aws:secretsmanager:db-password"
        );

        let missing = provider.describe(&qualified("absent")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_current_value() {
        let provider = MemoryProvider::new();
        let name = qualified("db-password");
        provider.insert(
            RemoteResource::new("arn:1", name.as_str())
                .with_value(Payload::from_str_value("p@ss")),
        );

        let value = provider.current_value(&name).await.unwrap();
        assert_eq!(value.as_text(), Some("p@ss"));

        let err = provider.current_value(&qualified("absent")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_injected_fault_hits_one_operation_only() {
        let provider = MemoryProvider::new();
        let name = qualified("shared/db-conn");
        provider.insert(RemoteResource::new("arn:2", name.as_str()));
        provider.inject_fault(
            name.as_str(),
            FaultOp::Describe,
            Fault::AccessDenied("not authorized".into()),
        );

        let err = provider.describe(&name).await.unwrap_err();
        assert!(err.is_access_denied());

        // current_value is unaffected by the describe fault
        let err = provider.current_value(&name).await.unwrap_err();
        assert!(!err.is_access_denied());
    }

    #[tokio::test]
    async fn test_list_by_prefix_is_sorted() {
        let provider = MemoryProvider::new();
        for name in ["b-key", "a-key", "other"] {
            let qn = qualified(name);
            provider.insert(RemoteResource::new(format!("arn:{name}"), qn.as_str()));
        }

        let entries = provider.list_by_prefix("/dev/app/").await.unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.windows(2).all(|w| w[0].name <= w[1].name));
    }
}
