//! JSON manifest of declared conventions.
//!
//! Documentation tooling consumes the catalog as data: which observations a
//! process emits, under which names, with which tag keys. The manifest
//! mirrors the registry in declaration order.

use serde::Serialize;

use crate::registry::Registry;

/// Serializable view of a registry.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub kinds: Vec<KindEntry<'a>>,
}

/// Serializable view of one observation kind.
#[derive(Debug, Serialize)]
pub struct KindEntry<'a> {
    pub name: &'a str,
    pub contextual_name: &'a str,
    pub prefix: &'a str,
    pub low_cardinality_tag_keys: Vec<&'a str>,
}

/// Build the manifest view of a registry.
pub fn describe(registry: &Registry) -> Manifest<'_> {
    Manifest {
        kinds: registry
            .kinds()
            .map(|kind| KindEntry {
                name: kind.name(),
                contextual_name: kind.contextual_name(),
                prefix: kind.prefix(),
                low_cardinality_tag_keys: kind
                    .low_cardinality_keys()
                    .iter()
                    .map(|key| key.key())
                    .collect(),
            })
            .collect(),
    }
}

/// Render a registry as pretty-printed JSON.
pub fn render(registry: &Registry) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&describe(registry))
}
