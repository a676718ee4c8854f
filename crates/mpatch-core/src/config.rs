//! Run configuration: candidate extension, target field, and failure policies.

use serde::{Deserialize, Serialize};

/// Extension (without the dot) that marks a candidate file.
pub const DEFAULT_EXTENSION: &str = "object";

/// Suffix appended to a candidate's file name to form its patch file name.
pub const DEFAULT_PATCH_SUFFIX: &str = ".patch";

/// Top-level field forced to `true`.
pub const DEFAULT_FIELD: &str = "printable";

/// How the loader treats comment syntax in candidate files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentMode {
    /// Remove `//` and `/* */` comments with a plain substring scan.
    ///
    /// String literals are not recognised, so a `//` inside a JSON string
    /// (a URL, say) is stripped as well.
    #[default]
    Strip,
    /// Hand the file content to the decoder untouched.
    Keep,
}

/// What to do when the output directory for a patch cannot be created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectoryPolicy {
    /// Report the failure, count the file as failed, and move on.
    #[default]
    SkipFile,
    /// Report the failure and attempt the write anyway.
    Attempt,
}

/// Configuration for a patch run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchConfig {
    /// Candidate file extension, without the leading dot.
    pub extension: String,
    /// Appended verbatim to the candidate file name (`x.object` -> `x.object.patch`).
    pub patch_suffix: String,
    /// Top-level field to force to `true`.
    pub field: String,
    /// Comment handling in the loader.
    pub comments: CommentMode,
    /// Handling of output directory creation failures.
    pub directory_policy: DirectoryPolicy,
    /// Follow symbolic links while walking the scan root.
    pub follow_links: bool,
    /// Optional cap on candidate size in bytes, below the addressable limit.
    pub max_file_size: Option<u64>,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            patch_suffix: DEFAULT_PATCH_SUFFIX.to_string(),
            field: DEFAULT_FIELD.to_string(),
            comments: CommentMode::default(),
            directory_policy: DirectoryPolicy::default(),
            follow_links: false,
            max_file_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = PatchConfig::default();
        assert_eq!(c.extension, "object");
        assert_eq!(c.patch_suffix, ".patch");
        assert_eq!(c.field, "printable");
        assert_eq!(c.comments, CommentMode::Strip);
        assert_eq!(c.directory_policy, DirectoryPolicy::SkipFile);
        assert!(!c.follow_links);
        assert!(c.max_file_size.is_none());
    }

    #[test]
    fn config_serde_roundtrip() {
        let c = PatchConfig {
            comments: CommentMode::Keep,
            directory_policy: DirectoryPolicy::Attempt,
            max_file_size: Some(1024),
            ..Default::default()
        };
        let text = serde_json::to_string(&c).unwrap();
        let back: PatchConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, c);
    }
}
