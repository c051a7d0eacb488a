//! Core domain types for the Skyforge reconciliation engine.
//!
//! This crate defines the identity model shared by every other crate:
//! logical resource keys, qualified external names, stable construct
//! identifiers, and secret payloads. Everything here is deterministic and
//! free of I/O; the provider and reconcile crates build on top of it.

pub mod error;
pub mod identity;
pub mod key;
pub mod naming;
pub mod payload;

pub use error::{CoreError, Result};
pub use identity::StableIdentity;
pub use key::{ResourceKey, ResourceKind};
pub use naming::{DeploymentContext, QualifiedName};
pub use payload::Payload;
