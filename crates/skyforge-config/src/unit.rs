//! Deployment-unit declarations as written in TOML.
//!
//! ```toml
//! environment = "dev"
//! application = "trading"
//!
//! [[resource]]
//! kind = "secret"
//! name = "cognito-clientsecret"
//! externally_sourced = true
//! source = "cognito.client-secret"
//!
//! [[resource]]
//! kind = "secret"
//! name = "db-password"
//!
//! [[resource]]
//! kind = "container-repository"
//! name = "web-app"
//!
//! [preservation]
//! denylist = ["test-secret"]
//! ```

use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use skyforge_core::ResourceKind;
use std::path::Path;

/// One declared resource within a deployment unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDecl {
    /// The kind of resource.
    pub kind: ResourceKind,
    /// The logical name, unique per kind within the unit.
    pub name: String,
    /// Whether the resource's value must always mirror a sibling system's
    /// live output instead of being preserved from its own prior value.
    #[serde(default)]
    pub externally_sourced: bool,
    /// Which sibling output holds the authoritative value. Required when
    /// `externally_sourced` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Preservation overrides for the unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreservationDecl {
    /// Logical secret names whose remote values are never preserved on
    /// adoption (known test/throwaway keys).
    #[serde(default)]
    pub denylist: Vec<String>,
}

/// A deployment unit as declared in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentUnit {
    /// Environment scope, e.g. `"dev"`.
    pub environment: String,
    /// Application scope within the environment.
    pub application: String,
    /// Declared resources, in discovery order.
    #[serde(default, rename = "resource")]
    pub resources: Vec<ResourceDecl>,
    /// Preservation overrides.
    #[serde(default)]
    pub preservation: PreservationDecl,
}

impl DeploymentUnit {
    /// Parses a unit from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or missing required
    /// fields.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a unit from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if its contents are malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for decl in &self.resources {
            if decl.externally_sourced && decl.source.is_none() {
                return Err(ConfigError::validation(format!(
                    "resource '{}' is externally sourced but names no source",
                    decl.name
                )));
            }
            if !decl.externally_sourced && decl.source.is_some() {
                return Err(ConfigError::validation(format!(
                    "resource '{}' names a source but is not externally sourced",
                    decl.name
                )));
            }
            if decl.kind == ResourceKind::ContainerRepository && decl.externally_sourced {
                return Err(ConfigError::validation(format!(
                    "repository '{}' cannot be externally sourced: repositories carry no payload",
                    decl.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: &str = r#"
        environment = "dev"
        application = "trading"

        [[resource]]
        kind = "secret"
        name = "cognito-clientsecret"
        externally_sourced = true
        source = "cognito.client-secret"

        [[resource]]
        kind = "container-repository"
        name = "web-app"

        [preservation]
        denylist = ["test-secret"]
    "#;

    #[test]
    fn test_parse_unit() {
        let unit = DeploymentUnit::from_toml_str(UNIT).unwrap();
        assert_eq!(unit.environment, "dev");
        assert_eq!(unit.resources.len(), 2);
        assert!(unit.resources[0].externally_sourced);
        assert_eq!(unit.preservation.denylist, vec!["test-secret"]);
    }

    #[test]
    fn test_missing_scope_is_a_parse_error() {
        let err = DeploymentUnit::from_toml_str("application = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unit.toml");
        std::fs::write(&path, UNIT).unwrap();
        let unit = DeploymentUnit::load(&path).unwrap();
        assert_eq!(unit.application, "trading");
    }

    #[test]
    fn test_externally_sourced_requires_source() {
        let unit = DeploymentUnit::from_toml_str(
            r#"
            environment = "dev"
            application = "app"

            [[resource]]
            kind = "secret"
            name = "cognito-clientsecret"
            externally_sourced = true
            "#,
        )
        .unwrap();
        assert!(matches!(
            unit.validate(),
            Err(ConfigError::Validation(_))
        ));
    }
}
