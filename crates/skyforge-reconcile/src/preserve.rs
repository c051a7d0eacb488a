//! Value preservation policy for adopted resources.

use skyforge_core::Payload;

/// Where an adopted resource's effective payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadOrigin {
    /// The retrieved remote value, carried forward byte-for-byte.
    Preserved,
    /// A freshly generated value (payload absent or category denylisted).
    Synthesized,
}

/// Decides the effective payload for an `AdoptExisting` action.
///
/// The retrieved payload is preserved verbatim unless it is absent or the
/// resource's category is denylisted for preservation; in both of those
/// cases a fresh payload is synthesized while the external identity is
/// still adopted (never duplicated).
#[must_use]
pub fn preserve_or_synthesize(
    retrieved: Option<Payload>,
    denylisted: bool,
) -> (Payload, PayloadOrigin) {
    match retrieved {
        Some(payload) if !denylisted => (payload, PayloadOrigin::Preserved),
        _ => (Payload::generated(), PayloadOrigin::Synthesized),
    }
}
