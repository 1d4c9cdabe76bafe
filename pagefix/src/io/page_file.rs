//! Read, rewrite and conditionally write back a single target file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::rewrite::Rewriter;
use crate::core::types::FileOutcome;

/// Whether changed content is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    DryRun,
}

/// Apply `rewriter` to the file at `path`.
///
/// The file is decoded strictly as UTF-8. It is only written when the
/// rewritten text differs from what was read, so unchanged files keep their
/// bytes and modification time.
pub fn process_file(path: &Path, rewriter: &Rewriter, mode: WriteMode) -> Result<FileOutcome> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let original =
        String::from_utf8(bytes).with_context(|| format!("decode {} as utf-8", path.display()))?;

    let rewritten = rewriter.transform(&original);
    if rewritten == original {
        debug!(path = %path.display(), "no rewrite needed");
        return Ok(FileOutcome::Unchanged);
    }

    match mode {
        WriteMode::DryRun => Ok(FileOutcome::WouldFix),
        WriteMode::Write => {
            fs::write(path, rewritten).with_context(|| format!("write {}", path.display()))?;
            debug!(path = %path.display(), "rewrote file");
            Ok(FileOutcome::Fixed)
        }
    }
}
