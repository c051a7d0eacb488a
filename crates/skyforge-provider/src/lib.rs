//! Resource-provider query abstraction for Skyforge.
//!
//! The reconciliation engine never talks to a cloud SDK directly; it goes
//! through the [`ResourceProvider`] trait defined here. Implementations
//! wrap whatever describe/get/list API the target account exposes and
//! surface failures through the [`ProviderError`] taxonomy so the engine
//! can fold them into existence verdicts.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ErrorCategory, ProviderError};
pub use traits::ResourceProvider;
pub use types::RemoteResource;
