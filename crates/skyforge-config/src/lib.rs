//! Deployment-unit configuration for Skyforge.
//!
//! A deployment unit declares its environment/application scope and the
//! named resources it needs. Declarations are loaded from TOML and resolved
//! once, at load time, into a [`DeploymentPlan`]: every resource gets its
//! validated [`skyforge_core::ResourceKey`] and its category flags
//! (`externally_sourced`, `preserve_denylisted`) here, so the decision
//! logic downstream never re-derives behavior from name patterns.
//!
//! Malformed configuration is the only fatal error class in the system:
//! it aborts before any reconciliation begins.

pub mod plan;
pub mod unit;

pub use plan::{DeploymentPlan, ResourceSpec};
pub use unit::{DeploymentUnit, PreservationDecl, ResourceDecl};

use thiserror::Error;

/// Error types for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
