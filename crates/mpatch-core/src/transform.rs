//! Field transformation: force one top-level field to `true`.

use serde_json::Value;

/// Outcome of [`apply_field`].
#[derive(Clone, Debug, PartialEq)]
pub enum Transform {
    /// The value has no such top-level field (or is not an object at all).
    NotApplicable,
    /// The field was found and overwritten.
    Patched {
        /// Deep copy taken before the mutation.
        original: Value,
        /// The value with the field set to `true`.
        mutated: Value,
    },
}

impl Transform {
    /// Returns `true` if the value was patched.
    pub fn is_patched(&self) -> bool {
        matches!(self, Self::Patched { .. })
    }
}

/// Look up `field` at the top level of `value` and force it to `true`.
///
/// The prior value of the field is not inspected: strings, numbers, nulls
/// and nested structures are all replaced by the boolean. No other key is
/// touched.
pub fn apply_field(mut value: Value, field: &str) -> Transform {
    let Some(map) = value.as_object() else {
        return Transform::NotApplicable;
    };
    if !map.contains_key(field) {
        return Transform::NotApplicable;
    }

    let original = value.clone();
    if let Some(slot) = value.get_mut(field) {
        *slot = Value::Bool(true);
    }

    Transform::Patched {
        original,
        mutated: value,
    }
}
