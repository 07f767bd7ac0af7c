//! Lowcard: typed observation naming and low-cardinality tag conventions.
//!
//! An *observation* is a unit of recorded work (span, metric, log
//! correlation) with a stable name, timing, and tags. Lowcard holds the
//! naming side of that contract: every observation kind a process can emit
//! is declared up front as an immutable descriptor, together with the closed
//! set of low-cardinality tag keys it may carry. The instrumentation layer
//! that actually records and exports observations consumes these
//! descriptors; it never invents names or keys of its own.
//!
//! Keeping the set closed is what keeps exported series cheap: a tag key is
//! only declared here when its value domain is small and bounded, so every
//! dimension a metrics backend indexes on is known ahead of time.
//!
//! # Modules
//!
//! - [`descriptor`]: observation kind and tag key types
//! - [`error`]: definition-conflict errors
//! - [`function`]: built-in kind for function invocations
//! - [`manifest`]: JSON manifest of declared conventions
//! - [`observe`]: the recorder seam instrumentation plugs into
//! - [`otel`]: OpenTelemetry attribute helpers
//! - [`registry`]: validated registry of observation kinds

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions, // observe::ObservationHandle is fine
    clippy::must_use_candidate       // Not all functions need #[must_use]
)]

pub mod descriptor;
pub mod error;
pub mod function;
pub mod manifest;
pub mod observe;
pub mod otel;
pub mod registry;

pub use descriptor::{DocumentedObservation, KeyName, ObservationKind, TagKey};
pub use error::DefinitionError;
pub use registry::Registry;
