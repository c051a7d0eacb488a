//! Resolved deployment plans.
//!
//! [`DeploymentPlan::resolve`] turns raw declarations into validated keys
//! and per-resource flags exactly once. After this point nothing in the
//! system re-derives behavior from resource names.

use crate::unit::DeploymentUnit;
use crate::{ConfigError, Result};
use indexmap::IndexMap;
use skyforge_core::{DeploymentContext, ResourceKey, StableIdentity};
use tracing::warn;

/// A fully-resolved resource entry: validated key plus category flags.
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    /// The validated logical key.
    pub key: ResourceKey,
    /// Whether the value must mirror a sibling system's live output.
    pub externally_sourced: bool,
    /// Whether the remote value is never preserved on adoption.
    pub preserve_denylisted: bool,
    /// Which sibling output holds the authoritative value, when
    /// `externally_sourced` is set.
    pub source: Option<String>,
}

/// A deployment unit after load-time resolution.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    /// Environment/application scope for qualified-name derivation.
    pub context: DeploymentContext,
    resources: IndexMap<ResourceKey, ResourceSpec>,
}

impl DeploymentPlan {
    /// Resolves a declared unit into a plan.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for invalid scope or key names,
    /// duplicate keys, keys whose stable identities collide, or
    /// inconsistent externally-sourced declarations. These are the fatal,
    /// pre-reconciliation errors; nothing past this point aborts a run.
    pub fn resolve(unit: &DeploymentUnit) -> Result<Self> {
        unit.validate()?;

        let context = DeploymentContext::new(&unit.environment, &unit.application)
            .map_err(|e| ConfigError::validation(e.to_string()))?;

        let mut resources = IndexMap::new();
        let mut identities: IndexMap<StableIdentity, ResourceKey> = IndexMap::new();
        for decl in &unit.resources {
            let key = ResourceKey::new(decl.kind, &decl.name)
                .map_err(|e| ConfigError::validation(e.to_string()))?;
            let denylisted = unit.preservation.denylist.contains(&decl.name);
            let spec = ResourceSpec {
                key: key.clone(),
                externally_sourced: decl.externally_sourced,
                preserve_denylisted: denylisted,
                source: decl.source.clone(),
            };
            if resources.insert(key.clone(), spec).is_some() {
                return Err(ConfigError::validation(format!(
                    "duplicate resource declaration: {key}"
                )));
            }
            // Identity allocation folds separators, so distinct keys like
            // `a-b` and `a.b` would map to one construct. Rejecting that
            // here keeps allocation a pure function of the key.
            let identity = StableIdentity::allocate(&key);
            if let Some(existing) = identities.insert(identity.clone(), key.clone()) {
                return Err(ConfigError::validation(format!(
                    "resources {existing} and {key} allocate the same stable identity '{identity}'"
                )));
            }
        }

        for name in &unit.preservation.denylist {
            let known = unit.resources.iter().any(|decl| &decl.name == name);
            if !known {
                warn!(name = %name, "Preservation denylist names an undeclared resource");
            }
        }

        Ok(Self { context, resources })
    }

    /// Iterates resource specs in declaration (discovery) order.
    pub fn resources(&self) -> impl Iterator<Item = &ResourceSpec> {
        self.resources.values()
    }

    /// Looks up the spec for a key.
    #[must_use]
    pub fn get(&self, key: &ResourceKey) -> Option<&ResourceSpec> {
        self.resources.get(key)
    }

    /// Number of declared resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns whether the plan declares no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyforge_core::ResourceKind;

    fn unit(toml: &str) -> DeploymentUnit {
        DeploymentUnit::from_toml_str(toml).unwrap()
    }

    #[test]
    fn test_resolve_preserves_declaration_order() {
        let plan = DeploymentPlan::resolve(&unit(
            r#"
            environment = "dev"
            application = "trading"

            [[resource]]
            kind = "secret"
            name = "b-key"

            [[resource]]
            kind = "secret"
            name = "a-key"
            "#,
        ))
        .unwrap();

        let names: Vec<_> = plan.resources().map(|s| s.key.name.clone()).collect();
        assert_eq!(names, vec!["b-key", "a-key"]);
    }

    #[test]
    fn test_denylist_flag_resolved_at_load_time() {
        let plan = DeploymentPlan::resolve(&unit(
            r#"
            environment = "dev"
            application = "trading"

            [[resource]]
            kind = "secret"
            name = "test-secret"

            [[resource]]
            kind = "secret"
            name = "db-password"

            [preservation]
            denylist = ["test-secret"]
            "#,
        ))
        .unwrap();

        let denylisted = ResourceKey::secret("test-secret").unwrap();
        let preserved = ResourceKey::secret("db-password").unwrap();
        assert!(plan.get(&denylisted).unwrap().preserve_denylisted);
        assert!(!plan.get(&preserved).unwrap().preserve_denylisted);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let err = DeploymentPlan::resolve(&unit(
            r#"
            environment = "dev"
            application = "trading"

            [[resource]]
            kind = "secret"
            name = "api-key"

            [[resource]]
            kind = "secret"
            name = "api-key"
            "#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_same_name_different_kinds_allowed() {
        let plan = DeploymentPlan::resolve(&unit(
            r#"
            environment = "dev"
            application = "trading"

            [[resource]]
            kind = "secret"
            name = "web-app"

            [[resource]]
            kind = "container-repository"
            name = "web-app"
            "#,
        ))
        .unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan.resources()
                .filter(|s| s.key.kind == ResourceKind::Secret)
                .count(),
            1
        );
    }

    #[test]
    fn test_colliding_stable_identities_rejected() {
        // Different separators, same folded identity (SecretAB).
        let err = DeploymentPlan::resolve(&unit(
            r#"
            environment = "dev"
            application = "trading"

            [[resource]]
            kind = "secret"
            name = "a-b"

            [[resource]]
            kind = "secret"
            name = "a.b"
            "#,
        ))
        .unwrap_err();
        match err {
            ConfigError::Validation(message) => {
                assert!(message.contains("stable identity"));
                assert!(message.contains("a-b"));
                assert!(message.contains("a.b"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_invalid_key_name_is_fatal() {
        let err = DeploymentPlan::resolve(&unit(
            r#"
            environment = "dev"
            application = "trading"

            [[resource]]
            kind = "secret"
            name = "Bad Name"
            "#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
