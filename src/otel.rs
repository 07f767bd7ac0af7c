//! OpenTelemetry attribute helpers.
//!
//! Consumers recording through the OpenTelemetry API attach declared tags
//! without restating key strings.

use opentelemetry::{Key, KeyValue, Value};

use crate::descriptor::TagKey;

impl From<&TagKey> for Key {
    fn from(key: &TagKey) -> Self {
        Key::from_static_str(key.key())
    }
}

/// Build a `KeyValue` attribute from a declared tag key.
pub fn key_value(key: &TagKey, value: impl Into<Value>) -> KeyValue {
    KeyValue::new(Key::from(key), value.into())
}
