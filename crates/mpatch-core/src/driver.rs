//! The traversal driver.
//!
//! [`PatchRun`] walks the scan root, filters candidate files by extension,
//! and pushes each one through load → decode → transform → diff → write.
//! Failures are contained per file: they are counted, reported, and the walk
//! moves on. Only a scan root that cannot be enumerated ends the run early.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{DirectoryPolicy, PatchConfig};
use crate::error::{PatchError, PatchResult};
use crate::loader::{load_text, write_text};
use crate::path_map::{ensure_parent_dir, map_output_path};
use crate::report::{ProgressReporter, RunSummary};
use crate::transform::{apply_field, Transform};

/// What happened to a single candidate.
#[derive(Debug)]
enum Outcome {
    /// A patch was written at this path.
    Patched(PathBuf),
    /// The candidate has no target field.
    NotApplicable,
}

/// A configured patch run.
#[derive(Clone, Debug, Default)]
pub struct PatchRun {
    config: PatchConfig,
}

impl PatchRun {
    /// Create a run with the given configuration.
    pub fn new(config: PatchConfig) -> Self {
        Self { config }
    }

    /// The configuration this run uses.
    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    /// Walk `scan_root` and write a patch under `patch_root` for every
    /// candidate that carries the target field.
    ///
    /// Entries are visited in file-name order within each directory. Returns
    /// [`PatchError::RootAccess`] if the scan root itself cannot be
    /// enumerated; every other error is absorbed into the summary's
    /// `failed` count.
    pub fn run(
        &self,
        scan_root: &Path,
        patch_root: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> PatchResult<RunSummary> {
        reporter.enumerating(scan_root);
        info!(
            scan_root = %scan_root.display(),
            patch_root = %patch_root.display(),
            "enumerating"
        );

        let mut summary = RunSummary::default();
        let walker = WalkDir::new(scan_root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(PatchError::RootAccess {
                        path: scan_root.to_path_buf(),
                        source: io::Error::from(e),
                    });
                }
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    reporter.walk_failed(&e);
                    continue;
                }
            };

            // `file_type` describes a root symlink itself; check what it points at.
            if entry.depth() == 0 && !entry.path().is_dir() {
                return Err(PatchError::RootAccess {
                    path: scan_root.to_path_buf(),
                    source: io::Error::other("not a directory"),
                });
            }

            if !self.is_candidate(&entry) {
                continue;
            }

            let file = entry.path();
            summary.enumerated += 1;
            reporter.checking(file);

            match self.process_file(scan_root, patch_root, file, reporter) {
                Ok(Outcome::Patched(patch)) => {
                    summary.patched += 1;
                    debug!(file = %file.display(), patch = %patch.display(), "patched");
                }
                Ok(Outcome::NotApplicable) => {
                    debug!(file = %file.display(), field = %self.config.field, "field absent; skipped");
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!(file = %file.display(), error = %e, "candidate failed");
                    reporter.file_failed(file, &e);
                }
            }
        }

        info!(
            enumerated = summary.enumerated,
            patched = summary.patched,
            failed = summary.failed,
            skipped = summary.skipped(),
            clean = summary.is_clean(),
            "run complete"
        );
        reporter.finished(&summary);
        Ok(summary)
    }

    fn is_candidate(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == self.config.extension.as_str())
    }

    fn process_file(
        &self,
        scan_root: &Path,
        patch_root: &Path,
        file: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> PatchResult<Outcome> {
        let text = load_text(file, self.config.comments, self.config.max_file_size)?;
        let value: Value = serde_json::from_str(&text).map_err(|source| PatchError::Parse {
            path: file.to_path_buf(),
            source,
        })?;

        let (original, mutated) = match apply_field(value, &self.config.field) {
            Transform::NotApplicable => return Ok(Outcome::NotApplicable),
            Transform::Patched { original, mutated } => (original, mutated),
        };

        let patch_path = map_output_path(scan_root, patch_root, file, &self.config.patch_suffix)?;

        if let Err(e) = ensure_parent_dir(&patch_path) {
            if let PatchError::DirectoryCreate { path, .. } = &e {
                warn!(dir = %path.display(), error = %e, policy = ?self.config.directory_policy, "directory creation failed");
                reporter.directory_failed(path, &e);
            }
            if self.config.directory_policy == DirectoryPolicy::SkipFile {
                return Err(e);
            }
        }

        reporter.writing(&patch_path);
        let patch = mpatch_diff::diff(&original, &mutated);
        write_text(&patch_path, &patch.to_json_string()?)?;

        Ok(Outcome::Patched(patch_path))
    }
}
