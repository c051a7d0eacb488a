//! Existence probing.

use crate::verdict::ExistenceVerdict;
use skyforge_core::QualifiedName;
use skyforge_provider::ResourceProvider;
use tracing::{debug, warn};

/// Probes the provider for a qualified name and folds the result into a
/// tri-state verdict.
///
/// One describe call, no retries: a deployment must not block on a flaky
/// probe. A positive "not found" becomes [`ExistenceVerdict::NotFound`];
/// every other failure (access denial, throttling, timeout, API error)
/// becomes [`ExistenceVerdict::Unknown`] with the reason logged, and the
/// decision layer treats it like an absence.
pub async fn probe_existence(
    provider: &dyn ResourceProvider,
    name: &QualifiedName,
) -> ExistenceVerdict {
    match provider.describe(name).await {
        Ok(Some(record)) => {
            debug!(name = %name, external_id = %record.external_id, "Probe found existing resource");
            ExistenceVerdict::Found(record)
        }
        Ok(None) => {
            debug!(name = %name, "Probe reports resource absent");
            ExistenceVerdict::NotFound
        }
        Err(e) if e.is_not_found() => {
            debug!(name = %name, "Probe reports resource absent");
            ExistenceVerdict::NotFound
        }
        Err(e) => {
            warn!(
                name = %name,
                category = %e.category(),
                error = %e,
                "Probe failed, existence unknown"
            );
            ExistenceVerdict::Unknown {
                reason: e.to_string(),
                category: e.category(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skyforge_provider::{ErrorCategory, ProviderError, RemoteResource};

    struct FixedProvider(Result<Option<RemoteResource>, fn(&str) -> ProviderError>);

    #[async_trait]
    impl ResourceProvider for FixedProvider {
        async fn describe(
            &self,
            name: &QualifiedName,
        ) -> Result<Option<RemoteResource>, ProviderError> {
            match &self.0 {
                Ok(record) => Ok(record.clone()),
                Err(make) => Err(make(name.as_str())),
            }
        }

        async fn current_value(
            &self,
            name: &QualifiedName,
        ) -> Result<skyforge_core::Payload, ProviderError> {
            Err(ProviderError::not_found(name.as_str()))
        }

        async fn list_by_prefix(
            &self,
            _prefix: &str,
        ) -> Result<Vec<RemoteResource>, ProviderError> {
            Ok(vec![])
        }

        fn provider_name(&self) -> &'static str {
            "fixed"
        }
    }

    fn name() -> QualifiedName {
        let ctx = skyforge_core::DeploymentContext::new("dev", "app").unwrap();
        ctx.qualified_name(&skyforge_core::ResourceKey::secret("api-key").unwrap())
    }

    #[tokio::test]
    async fn test_found() {
        let provider = FixedProvider(Ok(Some(RemoteResource::new("arn:1", "/dev/app/api-key"))));
        assert!(probe_existence(&provider, &name()).await.is_found());
    }

    #[tokio::test]
    async fn test_not_found_error_folds_to_not_found() {
        let provider = FixedProvider(Err(|n| ProviderError::not_found(n)));
        let verdict = probe_existence(&provider, &name()).await;
        assert!(matches!(verdict, ExistenceVerdict::NotFound));
    }

    #[tokio::test]
    async fn test_access_denied_folds_to_unknown() {
        let provider = FixedProvider(Err(|n| ProviderError::access_denied(n, "nope")));
        let verdict = probe_existence(&provider, &name()).await;
        match verdict {
            ExistenceVerdict::Unknown { category, reason } => {
                assert_eq!(category, ErrorCategory::AccessControl);
                assert!(reason.contains("nope"));
            }
            other => panic!("expected Unknown, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_throttle_folds_to_unknown() {
        let provider = FixedProvider(Err(|_| ProviderError::throttled("rate exceeded")));
        let verdict = probe_existence(&provider, &name()).await;
        assert!(verdict.is_unknown());
    }
}
