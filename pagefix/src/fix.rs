//! Run driver for `pagefix`: discover targets, rewrite each, report.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::rewrite::Rewriter;
use crate::core::types::{FileReport, RunSummary};
use crate::io::config::FixConfig;
use crate::io::discover::{DiscoverOptions, discover_targets};
use crate::io::page_file::{WriteMode, process_file};

/// Process every target under `config.root`, writing the human-readable
/// report to `out`.
///
/// Config failures and an unreadable root abort the run. Unreadable
/// subdirectories are reported as `skipped` lines; per-file failures are
/// recorded in the returned summary and the run moves on to the next file.
pub fn run_fix<W: Write>(config: &FixConfig, mode: WriteMode, out: &mut W) -> Result<RunSummary> {
    let rewriter = Rewriter::for_wrapper(&config.wrapper_tag)?;
    let options = DiscoverOptions {
        file_name: &config.file_name,
        skip_dirs: &config.skip_dirs,
    };
    let discovered = discover_targets(&config.root, &options)
        .with_context(|| format!("discover {} files", config.file_name))?;

    info!(root = %config.root.display(), count = discovered.targets.len(), ?mode, "starting run");
    writeln!(
        out,
        "found: {} {} files under {}",
        discovered.targets.len(),
        config.file_name,
        config.root.display()
    )?;
    for reason in &discovered.unreadable {
        writeln!(out, "skipped: {reason}")?;
    }

    let mut summary = RunSummary::default();
    for path in discovered.targets {
        let result = process_file(&path, &rewriter, mode).map_err(|err| format!("{err:#}"));
        match &result {
            Ok(outcome) => writeln!(out, "{}: {}", outcome.label(), path.display())?,
            Err(reason) => {
                warn!(path = %path.display(), %reason, "failed to process file");
                writeln!(out, "error: {reason}")?;
            }
        }
        summary.reports.push(FileReport { path, result });
    }

    match mode {
        WriteMode::Write => writeln!(
            out,
            "done: fixed={} unchanged={} errors={}",
            summary.fixed(),
            summary.unchanged(),
            summary.errors()
        )?,
        WriteMode::DryRun => writeln!(
            out,
            "done: would_fix={} unchanged={} errors={}",
            summary.would_fix(),
            summary.unchanged(),
            summary.errors()
        )?,
    }
    info!(
        found = summary.found(),
        fixed = summary.fixed(),
        would_fix = summary.would_fix(),
        errors = summary.errors(),
        "run finished"
    );
    Ok(summary)
}
