//! Secret payloads.
//!
//! Payloads are opaque byte strings. The `Debug` impl is redacted so
//! payload bytes never reach logs; generated payloads use the same random
//! material + base64 scheme throughout so synthesized values are always
//! printable.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of random bytes behind a generated payload (before encoding).
const GENERATED_BYTES: usize = 32;

/// An opaque secret payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Creates a payload from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Creates a payload from a string value.
    #[must_use]
    pub fn from_str_value(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }

    /// Generates a fresh random payload (base64 text of 32 random bytes).
    #[must_use]
    pub fn generated() -> Self {
        let mut bytes = [0u8; GENERATED_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(BASE64.encode(bytes).into_bytes())
    }

    /// Returns the payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the payload as UTF-8 text, if it is valid UTF-8.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Returns whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("len", &self.0.len())
            .field("bytes", &"<redacted>")
            .finish()
    }
}
