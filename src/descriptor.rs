//! Observation kind and tag key descriptors.
//!
//! Descriptors are plain immutable data, const-constructible so a crate can
//! declare its whole observation catalog as `const` items and hand the
//! registry a `&'static` slice. Nothing here allocates or fails; accessors
//! are total over the declared set.

/// A declared tag key for an observation.
///
/// Only low-cardinality keys belong here: a key is declared when its value
/// domain is small and bounded (a logical function name, an outcome enum),
/// never an unbounded identifier such as a request ID or timestamp. That
/// discipline is an invariant of the catalog, not a runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagKey {
    key: &'static str,
}

impl TagKey {
    /// Declare a tag key with its wire/export form.
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// The wire/export form of the key, e.g. `"spring.cloud.function.definition"`.
    pub const fn key(&self) -> &'static str {
        self.key
    }
}

/// Descriptor for one kind of observation a process can emit.
///
/// The descriptor carries everything the instrumentation layer needs to
/// open an observation: the stable machine name, the human-facing label,
/// the namespace prefix for its keys, and the closed set of tag keys it
/// may record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationKind {
    name: &'static str,
    contextual_name: &'static str,
    prefix: &'static str,
    low_cardinality_keys: &'static [TagKey],
}

impl ObservationKind {
    /// Declare an observation kind.
    pub const fn new(
        name: &'static str,
        contextual_name: &'static str,
        prefix: &'static str,
        low_cardinality_keys: &'static [TagKey],
    ) -> Self {
        Self {
            name,
            contextual_name,
            prefix,
            low_cardinality_keys,
        }
    }

    /// Stable dotted machine name, used as the primary metric/span name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Short human-facing label, distinct from the machine name so backend
    /// tooling can group and display without parsing dotted keys.
    pub const fn contextual_name(&self) -> &'static str {
        self.contextual_name
    }

    /// Namespace prefix for keys not otherwise qualified. Often equals
    /// [`name`](Self::name), but kinds may share a prefix.
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The declared tag keys, in declaration order.
    pub const fn low_cardinality_keys(&self) -> &'static [TagKey] {
        self.low_cardinality_keys
    }

    /// Whether `key` is declared for this kind.
    pub fn declares(&self, key: &TagKey) -> bool {
        self.low_cardinality_keys.iter().any(|k| k == key)
    }
}

/// Anything with a stable tag key name.
pub trait KeyName {
    /// The wire/export form of the key.
    fn key(&self) -> &'static str;
}

impl KeyName for TagKey {
    fn key(&self) -> &'static str {
        self.key
    }
}

/// Anything that documents an observation: a name, a label, a prefix, and
/// a closed tag set. Implemented by [`ObservationKind`]; callers that keep
/// their own descriptor types can implement it structurally.
pub trait DocumentedObservation {
    /// Stable dotted machine name.
    fn name(&self) -> &'static str;

    /// Short human-facing label.
    fn contextual_name(&self) -> &'static str;

    /// Namespace prefix for the kind's keys.
    fn prefix(&self) -> &'static str;

    /// Declared low-cardinality tag keys, in declaration order.
    fn low_cardinality_keys(&self) -> &'static [TagKey];
}

impl DocumentedObservation for ObservationKind {
    fn name(&self) -> &'static str {
        self.name
    }

    fn contextual_name(&self) -> &'static str {
        self.contextual_name
    }

    fn prefix(&self) -> &'static str {
        self.prefix
    }

    fn low_cardinality_keys(&self) -> &'static [TagKey] {
        self.low_cardinality_keys
    }
}
