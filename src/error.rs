//! Definition-conflict errors.
//!
//! The only fault this crate can surface is a conflicting or malformed
//! declaration. These are programmer errors caught eagerly when a
//! [`Registry`](crate::registry::Registry) is built, so startup fails
//! before any observation is recorded against an inconsistent catalog.

use thiserror::Error;

/// Error type for observation catalog validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("observation kind declared with an empty name")]
    EmptyKindName,

    #[error("duplicate observation kind name: {name}")]
    DuplicateKind { name: &'static str },

    #[error("observation kind {kind} declares an empty tag key")]
    EmptyTagKey { kind: &'static str },

    #[error("observation kind {kind} declares duplicate tag key: {key}")]
    DuplicateTagKey {
        kind: &'static str,
        key: &'static str,
    },
}
