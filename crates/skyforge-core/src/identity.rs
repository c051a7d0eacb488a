//! Stable construct identity allocation.
//!
//! The declarative layer tracks resources by an internal construct
//! identifier. If that identifier changes between runs the layer treats the
//! resource as new and schedules a destructive replace, so identities here
//! are a pure function of the [`ResourceKey`] alone: no timestamps, no
//! environment, no prior-run state. Calling [`StableIdentity::allocate`]
//! twice with the same key, in the same or a different process, always
//! yields the same identifier.

use crate::key::ResourceKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deterministic construct identifier for a logical resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StableIdentity(String);

impl StableIdentity {
    /// Allocates the identity for a key.
    ///
    /// The logical name is split on separators (`-`, `_`, `/`, `.`), each
    /// segment is capitalized, and the result is prefixed by the kind. The
    /// kind prefix keeps identities collision-free across kinds while the
    /// whole identifier stays a function of the key alone:
    /// `secret/api-key` → `SecretApiKey`,
    /// `container-repository/web/api` → `RepoWebApi`.
    ///
    /// All separators fold to the same segment boundary, so keys that
    /// differ only in separator choice (`a-b` vs `a.b`) allocate the same
    /// identifier; plan resolution rejects declarations that collide this
    /// way.
    #[must_use]
    pub fn allocate(key: &ResourceKey) -> Self {
        let mut id = String::from(key.kind.identity_prefix());
        for segment in key.name.split(['-', '_', '/', '.']) {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                id.push(first.to_ascii_uppercase());
                id.extend(chars);
            }
        }
        Self(id)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StableIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
