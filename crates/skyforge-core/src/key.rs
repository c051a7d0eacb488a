//! Logical resource keys.
//!
//! A [`ResourceKey`] names one logical resource within a deployment unit.
//! Keys are unique within a unit and stable across repeated deployments of
//! that unit; everything downstream (qualified names, stable identities,
//! reconciliation outcomes) is keyed by them.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of external resource a key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    /// A named secret holding a string payload.
    Secret,
    /// A container-image repository. Carries no payload.
    ContainerRepository,
}

impl ResourceKind {
    /// Returns whether resources of this kind carry a retrievable payload.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        matches!(self, Self::Secret)
    }

    /// Prefix used when allocating stable construct identifiers.
    #[must_use]
    pub fn identity_prefix(&self) -> &'static str {
        match self {
            Self::Secret => "Secret",
            Self::ContainerRepository => "Repo",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret => write!(f, "secret"),
            Self::ContainerRepository => write!(f, "container-repository"),
        }
    }
}

/// Logical name of a resource within a deployment unit.
///
/// The kind is part of the key: two resources of different kinds may share
/// a name without colliding, and identity allocation can derive a
/// kind-specific prefix while remaining a pure function of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey {
    /// The kind of resource this key names.
    pub kind: ResourceKind,
    /// The logical name, e.g. `"cognito-clientsecret"` or `"shared/db-conn"`.
    pub name: String,
}

impl ResourceKey {
    /// Creates a new key, validating the logical name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidKey` if the name is empty or contains
    /// characters outside `[a-z0-9._/-]`.
    pub fn new(kind: ResourceKind, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::invalid_key("name must not be empty"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "._/-".contains(c))
        {
            return Err(CoreError::invalid_key(format!(
                "name '{name}' contains characters outside [a-z0-9._/-]"
            )));
        }
        Ok(Self { kind, name })
    }

    /// Convenience constructor for secret keys.
    pub fn secret(name: impl Into<String>) -> Result<Self> {
        Self::new(ResourceKind::Secret, name)
    }

    /// Convenience constructor for container-repository keys.
    pub fn repository(name: impl Into<String>) -> Result<Self> {
        Self::new(ResourceKind::ContainerRepository, name)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}
