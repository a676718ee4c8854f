//! Run counters and progress hooks.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PatchError;

/// Counters accumulated over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Candidate files seen (regular files with the target extension).
    pub enumerated: u64,
    /// Patches written.
    pub patched: u64,
    /// Candidates that hit an error.
    pub failed: u64,
}

impl RunSummary {
    /// Candidates that had no target field and were left alone.
    pub fn skipped(&self) -> u64 {
        self.enumerated
            .saturating_sub(self.patched)
            .saturating_sub(self.failed)
    }

    /// Returns `true` if no candidate failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "enumerated: {} patched: {} failed: {}",
            self.enumerated, self.patched, self.failed
        )
    }
}

/// Receives user-facing progress events from a [`PatchRun`](crate::PatchRun).
///
/// Every method has an empty default so implementors pick what they show.
pub trait ProgressReporter {
    /// Traversal of `root` is starting.
    fn enumerating(&mut self, _root: &Path) {}

    /// `file` is a candidate and is about to be processed.
    fn checking(&mut self, _file: &Path) {}

    /// A patch for a candidate is about to be written to `patch`.
    fn writing(&mut self, _patch: &Path) {}

    /// The directory tree for `dir` could not be created.
    fn directory_failed(&mut self, _dir: &Path, _error: &PatchError) {}

    /// Processing `file` failed; it has been counted and the run continues.
    fn file_failed(&mut self, _file: &Path, _error: &PatchError) {}

    /// A subdirectory below the scan root could not be read.
    fn walk_failed(&mut self, _error: &walkdir::Error) {}

    /// The run is over.
    fn finished(&mut self, _summary: &RunSummary) {}
}

/// A reporter that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_display_matches_console_format() {
        let s = RunSummary { enumerated: 5, patched: 3, failed: 1 };
        assert_eq!(s.to_string(), "enumerated: 5 patched: 3 failed: 1");
    }

    #[test]
    fn skipped_is_derived() {
        let s = RunSummary { enumerated: 5, patched: 3, failed: 1 };
        assert_eq!(s.skipped(), 1);
        assert!(!s.is_clean());
        assert_eq!(RunSummary::default().skipped(), 0);
        assert!(RunSummary::default().is_clean());
    }
}
