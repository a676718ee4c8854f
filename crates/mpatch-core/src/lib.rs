//! Patch generation pipeline for massive-patch.
//!
//! Walks a tree of unpacked `.object` files, forces the top-level
//! `printable` field to `true` wherever it exists, and writes the resulting
//! JSON-Patch next to a mirrored path under the patch root.
//!
//! # Key Types
//!
//! - [`PatchRun`] -- The traversal driver; returns a [`RunSummary`]
//! - [`PatchConfig`] -- Extension, field, comment mode, and directory policy
//! - [`Transform`] -- Result of the field transformation (patched or not applicable)
//! - [`ProgressReporter`] -- Hook for user-facing progress output
//! - [`PatchError`] -- Per-file and run-level failures

pub mod config;
pub mod driver;
pub mod error;
pub mod loader;
pub mod path_map;
pub mod report;
pub mod transform;

pub use config::{CommentMode, DirectoryPolicy, PatchConfig};
pub use driver::PatchRun;
pub use error::{PatchError, PatchResult};
pub use loader::{load_text, strip_comments, write_text};
pub use path_map::{ensure_parent_dir, map_output_path};
pub use report::{ProgressReporter, RunSummary, SilentReporter};
pub use transform::{apply_field, Transform};
pub use walkdir::Error as WalkError;
