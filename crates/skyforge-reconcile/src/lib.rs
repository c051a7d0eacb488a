//! Resource reconciliation engine for Skyforge deployments.
//!
//! Before the declarative layer creates a named secret or container-image
//! repository, this engine decides what today's deployment should do about
//! it: create it fresh, adopt the existing resource as-is, or adopt it and
//! overwrite its value from an authoritative source. The engine probes the
//! target account once per resource, folds provider failures into a
//! fail-open verdict, and pins a stable construct identity so a rerun never
//! triggers a destructive replace.
//!
//! The flow per resource:
//!
//! ```text
//! ResourceKey ──► probe (describe) ──► ExistenceVerdict
//!                                          │
//!                        retrieve value ◄──┤ (Found only)
//!                                          ▼
//!                                  decide(verdict, flags)
//!                                          ▼
//!                        effective payload + StableIdentity
//!                                          ▼
//!                               ReconcileOutcome ──► exporter
//! ```
//!
//! Everything is computed at most once per key per run; outcomes are
//! memoized inside [`ReconcileRun`] and discarded when the run ends. No
//! state survives between runs except what lives in the provider itself.

pub mod decision;
pub mod export;
pub mod outcome;
pub mod preserve;
pub mod probe;
pub mod retrieve;
pub mod run;
pub mod verdict;

pub use decision::{ReconcileAction, decide};
pub use export::{ExportEntry, MemoryExporter, OutputExporter};
pub use outcome::ReconcileOutcome;
pub use preserve::{PayloadOrigin, preserve_or_synthesize};
pub use probe::probe_existence;
pub use retrieve::retrieve_value;
pub use run::{ReconcileError, ReconcileRun, SourceValues};
pub use verdict::ExistenceVerdict;
