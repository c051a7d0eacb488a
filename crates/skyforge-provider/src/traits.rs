//! Provider traits.
//!
//! This module defines the contract every resource-provider backend must
//! implement. Implementations must be thread-safe (`Send + Sync`).

use async_trait::async_trait;
use skyforge_core::{Payload, QualifiedName};

use crate::error::ProviderError;
use crate::types::RemoteResource;

/// Query interface to the account that holds the external resources.
///
/// All three operations are read-only; reconciliation never mutates through
/// this trait. Creation and adoption happen in the declarative layer, which
/// consumes the reconciliation outcome.
///
/// # Example
///
/// ```ignore
/// use skyforge_provider::{ResourceProvider, ProviderError};
///
/// async fn exists(provider: &dyn ResourceProvider, name: &QualifiedName) -> bool {
///     matches!(provider.describe(name).await, Ok(Some(_)))
/// }
/// ```
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Looks up a resource by its fully-qualified name.
    ///
    /// Returns `Ok(None)` when the provider positively reports the name as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns an error for access denials, throttling, timeouts, and any
    /// other provider-side failure. Callers must not treat an error as
    /// evidence of absence; the engine folds errors into an `Unknown`
    /// verdict instead.
    async fn describe(
        &self,
        name: &QualifiedName,
    ) -> Result<Option<RemoteResource>, ProviderError>;

    /// Fetches the current payload of a resource known to exist.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::NotFound` if the name vanished between
    /// describe and fetch (eventual consistency), or any other provider
    /// failure. A failed fetch never changes an existence verdict.
    async fn current_value(&self, name: &QualifiedName) -> Result<Payload, ProviderError>;

    /// Lists resources whose qualified names start with the given prefix.
    ///
    /// Used for operator-facing inventory; the reconciliation decision
    /// itself relies only on `describe`.
    ///
    /// # Errors
    ///
    /// Returns an error for provider-side failures. An empty listing is
    /// `Ok(vec![])`, not an error.
    async fn list_by_prefix(&self, prefix: &str) -> Result<Vec<RemoteResource>, ProviderError>;

    /// Returns the name of this provider backend for logging/debugging.
    fn provider_name(&self) -> &'static str;
}
