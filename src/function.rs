//! Built-in observation kind for function invocations.
//!
//! These names are the wire contract with dashboards and alerting: once
//! released they never change, only grow.

use crate::descriptor::{ObservationKind, TagKey};

/// Logical name of the function definition being invoked.
pub const FUNCTION_NAME: TagKey = TagKey::new("spring.cloud.function.definition");

/// Tags recorded on every function invocation observation.
pub const FUNCTION_TAGS: &[TagKey] = &[FUNCTION_NAME];

/// Observation recorded around a function invocation.
pub const FUNCTION_INVOCATION: ObservationKind = ObservationKind::new(
    "spring.cloud.function",
    "function",
    "spring.cloud.function",
    FUNCTION_TAGS,
);

/// All built-in observation kinds, in declaration order.
pub const KINDS: &[ObservationKind] = &[FUNCTION_INVOCATION];
