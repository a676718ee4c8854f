use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

use colored::Colorize;
use mpatch_core::{PatchError, ProgressReporter, RunSummary, WalkError};

/// Prints progress to one stream and failures to another.
///
/// Output is best effort: a closed or broken stream never aborts the run.
pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> ProgressReporter for ConsoleReporter<O, E> {
    fn enumerating(&mut self, root: &Path) {
        let _ = writeln!(self.out, "Enumerating: \"{}\"", root.display());
    }

    fn checking(&mut self, file: &Path) {
        let _ = writeln!(self.out, "Checking \"{}\"", file.display());
    }

    fn writing(&mut self, patch: &Path) {
        let _ = writeln!(self.out, "{} \"{}\"", "Writing patch:".green(), patch.display());
    }

    fn directory_failed(&mut self, dir: &Path, _error: &PatchError) {
        let _ = writeln!(
            self.err,
            "{} Failed to create directory structure \"{}\"",
            "Error:".red().bold(),
            dir.display()
        );
    }

    fn file_failed(&mut self, file: &Path, error: &PatchError) {
        // Already printed by `directory_failed`.
        if matches!(error, PatchError::DirectoryCreate { .. }) {
            return;
        }
        let _ = writeln!(
            self.err,
            "{} \"{}\" : {}",
            "Exception file".red(),
            file.display(),
            error
        );
    }

    fn walk_failed(&mut self, error: &WalkError) {
        let _ = writeln!(self.err, "{} {}", "Warning: skipping".yellow(), error);
    }

    fn finished(&mut self, summary: &RunSummary) {
        let _ = writeln!(self.out, "{}", "Complete".bold());
        let _ = writeln!(self.out, "{summary}");
        let _ = self.out.flush();
        let _ = self.err.flush();
    }
}
