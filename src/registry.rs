//! Validated registry of observation kinds.
//!
//! The registry is built once from a `&'static` slice of declared kinds,
//! validated eagerly, and then only read. Iteration order is the
//! declaration order of the slice, so enumeration is deterministic across
//! calls for the life of the process.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::descriptor::ObservationKind;
use crate::error::DefinitionError;
use crate::function;

/// Immutable registry of observation kinds.
///
/// Safe for unsynchronized concurrent reads: nothing mutates after
/// construction.
#[derive(Debug)]
pub struct Registry {
    /// Declared kinds, in declaration order.
    kinds: &'static [ObservationKind],
    /// Index from stable name into `kinds`.
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry from declared kinds, validating the catalog.
    ///
    /// Validation is eager: a duplicate or empty kind name, or a duplicate
    /// or empty tag key within a kind, fails here rather than at first use.
    pub fn from_kinds(kinds: &'static [ObservationKind]) -> Result<Self, DefinitionError> {
        let mut by_name = HashMap::with_capacity(kinds.len());

        for (idx, kind) in kinds.iter().enumerate() {
            if kind.name().is_empty() {
                return Err(DefinitionError::EmptyKindName);
            }
            if by_name.insert(kind.name(), idx).is_some() {
                return Err(DefinitionError::DuplicateKind { name: kind.name() });
            }

            let mut seen = HashSet::with_capacity(kind.low_cardinality_keys().len());
            for key in kind.low_cardinality_keys() {
                if key.key().is_empty() {
                    return Err(DefinitionError::EmptyTagKey { kind: kind.name() });
                }
                if !seen.insert(key.key()) {
                    return Err(DefinitionError::DuplicateTagKey {
                        kind: kind.name(),
                        key: key.key(),
                    });
                }
            }
        }

        tracing::debug!(kinds = kinds.len(), "observation catalog validated");

        Ok(Self { kinds, by_name })
    }

    /// Iterate the declared kinds in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = &ObservationKind> {
        self.kinds.iter()
    }

    /// Look up a kind by its stable name.
    pub fn get(&self, name: &str) -> Option<&ObservationKind> {
        self.by_name.get(name).map(|&idx| &self.kinds[idx])
    }

    /// Number of declared kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the registry declares no kinds.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Process-wide registry of built-in observation kinds.
static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Get the registry of built-in kinds, building it on first use.
///
/// # Panics
///
/// Panics if the built-in catalog contains a definition conflict. The
/// catalog is compiled in, so this can only fire on a broken build of this
/// crate, never on caller input.
pub fn builtin() -> &'static Registry {
    BUILTIN.get_or_init(|| {
        Registry::from_kinds(function::KINDS).expect("built-in observation catalog is conflict-free")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TagKey;

    const GOOD: &[ObservationKind] = &[
        ObservationKind::new(
            "test.ingest",
            "ingest",
            "test.ingest",
            &[TagKey::new("test.ingest.source"), TagKey::new("test.ingest.outcome")],
        ),
        ObservationKind::new("test.flush", "flush", "test.flush", &[TagKey::new("test.flush.reason")]),
    ];

    #[test]
    fn test_from_kinds_accepts_conflict_free_catalog() {
        let registry = Registry::from_kinds(GOOD).expect("catalog should validate");
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_kinds_iterate_in_declaration_order_deterministically() {
        let registry = Registry::from_kinds(GOOD).expect("catalog should validate");

        let first: Vec<_> = registry.kinds().map(|k| k.name()).collect();
        let second: Vec<_> = registry.kinds().map(|k| k.name()).collect();

        assert_eq!(first, vec!["test.ingest", "test.flush"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_finds_kind_by_stable_name() {
        let registry = Registry::from_kinds(GOOD).expect("catalog should validate");

        let kind = registry.get("test.flush").expect("kind should exist");
        assert_eq!(kind.contextual_name(), "flush");
        assert!(registry.get("test.unknown").is_none());
    }

    #[test]
    fn test_duplicate_kind_name_fails_at_construction() {
        const DUPED: &[ObservationKind] = &[
            ObservationKind::new("test.ingest", "ingest", "test.ingest", &[]),
            ObservationKind::new("test.ingest", "ingest again", "test.ingest", &[]),
        ];

        let err = Registry::from_kinds(DUPED).expect_err("duplicate name should be rejected");
        assert_eq!(err, DefinitionError::DuplicateKind { name: "test.ingest" });
    }

    #[test]
    fn test_duplicate_tag_key_within_kind_fails_at_construction() {
        const DUPED: &[ObservationKind] = &[ObservationKind::new(
            "test.ingest",
            "ingest",
            "test.ingest",
            &[TagKey::new("test.ingest.source"), TagKey::new("test.ingest.source")],
        )];

        let err = Registry::from_kinds(DUPED).expect_err("duplicate key should be rejected");
        assert_eq!(
            err,
            DefinitionError::DuplicateTagKey {
                kind: "test.ingest",
                key: "test.ingest.source",
            }
        );
    }

    #[test]
    fn test_empty_names_fail_at_construction() {
        const EMPTY_NAME: &[ObservationKind] = &[ObservationKind::new("", "ingest", "test", &[])];
        const EMPTY_KEY: &[ObservationKind] =
            &[ObservationKind::new("test.ingest", "ingest", "test.ingest", &[TagKey::new("")])];

        assert_eq!(
            Registry::from_kinds(EMPTY_NAME).expect_err("empty name should be rejected"),
            DefinitionError::EmptyKindName
        );
        assert_eq!(
            Registry::from_kinds(EMPTY_KEY).expect_err("empty key should be rejected"),
            DefinitionError::EmptyTagKey { kind: "test.ingest" }
        );
    }

    #[test]
    fn test_same_tag_key_allowed_across_kinds() {
        const SHARED: &[ObservationKind] = &[
            ObservationKind::new("test.a", "a", "test", &[TagKey::new("test.outcome")]),
            ObservationKind::new("test.b", "b", "test", &[TagKey::new("test.outcome")]),
        ];

        // Uniqueness is scoped per kind, not across the registry.
        assert!(Registry::from_kinds(SHARED).is_ok());
    }

    #[test]
    fn test_builtin_is_stable_across_calls() {
        let first: Vec<_> = builtin().kinds().map(|k| k.name()).collect();
        let second: Vec<_> = builtin().kinds().map(|k| k.name()).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
