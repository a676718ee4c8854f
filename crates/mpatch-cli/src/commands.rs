use std::path::PathBuf;

use anyhow::Context;
use mpatch_core::{PatchRun, ProgressReporter, RunSummary};

use crate::cli::Cli;
use crate::console::ConsoleReporter;

pub fn run_command(cli: Cli) -> anyhow::Result<RunSummary> {
    execute(&cli, &mut ConsoleReporter::stdio())
}

fn execute(cli: &Cli, reporter: &mut dyn ProgressReporter) -> anyhow::Result<RunSummary> {
    let scan_root = PathBuf::from(&cli.unpacked_root);
    let patch_root = PathBuf::from(&cli.patch_root);
    let run = PatchRun::new(cli.to_config());

    tracing::debug!(config = ?run.config(), "starting patch run");

    run.run(&scan_root, &patch_root, reporter)
        .with_context(|| format!("patch run over {} aborted", scan_root.display()))
}
