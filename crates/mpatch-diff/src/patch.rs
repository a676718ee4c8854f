//! Patch document types.
//!
//! A [`Patch`] serializes as a bare JSON array of operation objects, each
//! shaped `{"op": ..., "path": ..., "value": ...}` per RFC 6902.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DiffResult;

/// A single JSON-Patch operation.
///
/// Only the operations the diff engine emits are modelled. `move`, `copy`
/// and `test` are never generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    /// Insert `value` at `path`.
    Add { path: String, value: Value },
    /// Remove whatever is at `path`.
    Remove { path: String },
    /// Overwrite the value at `path` with `value`.
    Replace { path: String, value: Value },
}

impl PatchOperation {
    /// The JSON pointer this operation targets.
    pub fn path(&self) -> &str {
        match self {
            Self::Add { path, .. } | Self::Remove { path } | Self::Replace { path, .. } => path,
        }
    }

    /// The operation name as it appears in the `op` member.
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::Replace { .. } => "replace",
        }
    }
}

/// An ordered JSON-Patch document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(pub Vec<PatchOperation>);

impl Patch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the patch contains no operations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The operations in application order.
    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    pub(crate) fn push(&mut self, op: PatchOperation) {
        self.0.push(op);
    }

    /// Serialize as compact JSON text with no trailing newline.
    pub fn to_json_string(&self) -> DiffResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_patch_serializes_as_empty_array() {
        assert_eq!(Patch::new().to_json_string().unwrap(), "[]");
    }

    #[test]
    fn replace_serializes_in_rfc_shape() {
        let patch = Patch(vec![PatchOperation::Replace {
            path: "/printable".into(),
            value: json!(true),
        }]);
        assert_eq!(
            patch.to_json_string().unwrap(),
            r#"[{"op":"replace","path":"/printable","value":true}]"#
        );
    }

    #[test]
    fn remove_has_no_value_member() {
        let patch = Patch(vec![PatchOperation::Remove { path: "/a".into() }]);
        assert_eq!(patch.to_json_string().unwrap(), r#"[{"op":"remove","path":"/a"}]"#);
    }

    #[test]
    fn deserializes_from_rfc_text() {
        let patch: Patch =
            serde_json::from_str(r#"[{"op":"add","path":"/x/-","value":{"k":1}}]"#).unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.operations()[0].op_name(), "add");
        assert_eq!(patch.operations()[0].path(), "/x/-");
    }
}
