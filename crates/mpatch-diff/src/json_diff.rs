//! Structural diff between two JSON values.
//!
//! Walks both trees in lockstep and emits the operations that turn `source`
//! into `target`. The output is deterministic: object keys are visited in
//! source order (then target order for additions), and array tails are
//! removed from the highest index down so that every emitted index remains
//! valid when the patch is applied front to back.

use serde_json::{Map, Value};

use crate::patch::{Patch, PatchOperation};
use crate::pointer;

/// Compute the patch that transforms `source` into `target`.
///
/// Equal values produce an empty patch. Values of different JSON types are
/// replaced wholesale; objects and arrays are compared member by member.
pub fn diff(source: &Value, target: &Value) -> Patch {
    let mut patch = Patch::new();
    diff_at(&mut patch, "", source, target);
    patch
}

fn diff_at(patch: &mut Patch, path: &str, source: &Value, target: &Value) {
    if source == target {
        return;
    }

    match (source, target) {
        (Value::Array(old), Value::Array(new)) => diff_arrays(patch, path, old, new),
        (Value::Object(old), Value::Object(new)) => diff_objects(patch, path, old, new),
        _ => patch.push(PatchOperation::Replace {
            path: path.to_string(),
            value: target.clone(),
        }),
    }
}

fn diff_arrays(patch: &mut Patch, path: &str, old: &[Value], new: &[Value]) {
    let common = old.len().min(new.len());

    for (i, (o, n)) in old.iter().zip(new.iter()).enumerate() {
        diff_at(patch, &pointer::push_index(path, i), o, n);
    }

    // Highest index first, so earlier removals don't shift later ones.
    for i in (common..old.len()).rev() {
        patch.push(PatchOperation::Remove {
            path: pointer::push_index(path, i),
        });
    }

    for value in &new[common..] {
        patch.push(PatchOperation::Add {
            path: pointer::push_end(path),
            value: value.clone(),
        });
    }
}

fn diff_objects(patch: &mut Patch, path: &str, old: &Map<String, Value>, new: &Map<String, Value>) {
    // Removed and modified keys.
    for (key, old_val) in old {
        let child = pointer::push_key(path, key);
        match new.get(key) {
            Some(new_val) => diff_at(patch, &child, old_val, new_val),
            None => patch.push(PatchOperation::Remove { path: child }),
        }
    }

    // Added keys.
    for (key, new_val) in new {
        if !old.contains_key(key) {
            patch.push(PatchOperation::Add {
                path: pointer::push_key(path, key),
                value: new_val.clone(),
            });
        }
    }
}
