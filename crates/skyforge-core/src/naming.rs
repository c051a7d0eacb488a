//! Qualified external names.
//!
//! A [`QualifiedName`] is the fully-qualified name a resource carries in the
//! target account, derived from the logical key plus the deployment scope.
//! Derivation is a pure function of `(key, environment, application)`; the
//! same key must map to the same name on every run or adoption breaks.

use crate::error::{CoreError, Result};
use crate::key::{ResourceKey, ResourceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment and application scope for one deployment unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentContext {
    /// Environment name, e.g. `"dev"` or `"prod"`.
    pub environment: String,
    /// Application name within the environment.
    pub application: String,
}

impl DeploymentContext {
    /// Creates a new context, validating both scope components.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidContext` if either component is empty or
    /// contains characters outside `[a-z0-9-]`.
    pub fn new(environment: impl Into<String>, application: impl Into<String>) -> Result<Self> {
        let environment = environment.into();
        let application = application.into();
        for (label, value) in [("environment", &environment), ("application", &application)] {
            if value.is_empty() {
                return Err(CoreError::invalid_context(format!(
                    "{label} must not be empty"
                )));
            }
            if !value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            {
                return Err(CoreError::invalid_context(format!(
                    "{label} '{value}' contains characters outside [a-z0-9-]"
                )));
            }
        }
        Ok(Self {
            environment,
            application,
        })
    }

    /// Derives the fully-qualified external name for a key.
    ///
    /// Secrets use path-style names (`/{env}/{app}/{name}`); repositories
    /// use dashed names (`{env}-{app}-{name}` with path separators folded
    /// to dashes). Both are pure functions of the inputs.
    #[must_use]
    pub fn qualified_name(&self, key: &ResourceKey) -> QualifiedName {
        let name = match key.kind {
            ResourceKind::Secret => {
                format!("/{}/{}/{}", self.environment, self.application, key.name)
            }
            ResourceKind::ContainerRepository => format!(
                "{}-{}-{}",
                self.environment,
                self.application,
                key.name.replace('/', "-")
            ),
        };
        QualifiedName(name)
    }
}

/// Fully-qualified external name of a resource in the target account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DeploymentContext {
        DeploymentContext::new("dev", "trading").unwrap()
    }

    #[test]
    fn test_secret_names_are_path_style() {
        let key = ResourceKey::secret("cognito-clientsecret").unwrap();
        assert_eq!(
            ctx().qualified_name(&key).as_str(),
            "/dev/trading/cognito-clientsecret"
        );
    }

    #[test]
    fn test_repository_names_are_dashed() {
        let key = ResourceKey::repository("web/api").unwrap();
        assert_eq!(ctx().qualified_name(&key).as_str(), "dev-trading-web-api");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let key = ResourceKey::secret("db-password").unwrap();
        assert_eq!(ctx().qualified_name(&key), ctx().qualified_name(&key));
    }

    #[test]
    fn test_invalid_context() {
        assert!(DeploymentContext::new("", "app").is_err());
        assert!(DeploymentContext::new("dev", "My App").is_err());
    }
}
