//! Payload retrieval.

use skyforge_core::{Payload, QualifiedName};
use skyforge_provider::ResourceProvider;
use tracing::warn;

/// Fetches the current payload of a resource the probe reported as found.
///
/// A failed fetch never downgrades the existence verdict: the resource is
/// still adopted by reference, the value just cannot be mirrored. That case
/// yields `None`, which downstream policy treats like an empty payload.
pub async fn retrieve_value(
    provider: &dyn ResourceProvider,
    name: &QualifiedName,
) -> Option<Payload> {
    match provider.current_value(name).await {
        Ok(payload) => Some(payload),
        Err(e) => {
            warn!(
                name = %name,
                category = %e.category(),
                error = %e,
                "Value retrieval failed, adopting without payload"
            );
            None
        }
    }
}
