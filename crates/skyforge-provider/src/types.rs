//! Provider data types.

use serde::{Deserialize, Serialize};
use skyforge_core::Payload;
use time::OffsetDateTime;

/// A resource record as reported by the provider's describe operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteResource {
    /// The provider-assigned external identifier (ARN or equivalent).
    pub external_id: String,
    /// The fully-qualified name the resource carries in the account.
    pub name: String,
    /// The current payload, if the resource holds one and describe returned it.
    pub value: Option<Payload>,
    /// When the resource was created, if reported.
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl RemoteResource {
    /// Creates a new record without a payload or creation time.
    #[must_use]
    pub fn new(external_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            name: name.into(),
            value: None,
            created_at: None,
        }
    }

    /// Sets the current payload.
    #[must_use]
    pub fn with_value(mut self, value: Payload) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the creation time.
    #[must_use]
    pub fn with_created_at(mut self, created_at: OffsetDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
