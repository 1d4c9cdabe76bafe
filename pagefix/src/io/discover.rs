//! Recursive discovery of target files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Which files to collect and which directories to prune.
#[derive(Debug, Clone)]
pub struct DiscoverOptions<'a> {
    pub file_name: &'a str,
    pub skip_dirs: &'a [String],
}

/// Result of a walk: the targets found plus the subtrees that could not be
/// read and were left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovered {
    pub targets: Vec<PathBuf>,
    pub unreadable: Vec<String>,
}

/// Collect every regular file under `root` named exactly `options.file_name`.
///
/// Entries are visited in file-name order so the result is stable between
/// runs. Symlinks are not followed. A missing or unreadable root fails the
/// discovery; an unreadable entry below the root is logged, recorded in
/// `unreadable`, and skipped.
pub fn discover_targets(root: &Path, options: &DiscoverOptions<'_>) -> Result<Discovered> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry, options.skip_dirs));

    let mut discovered = Discovered::default();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(err).with_context(|| format!("walk {}", root.display()));
            }
            Err(err) => {
                warn!(path = ?err.path(), error = %err, "skipping unreadable entry");
                discovered.unreadable.push(err.to_string());
                continue;
            }
        };
        if entry.file_type().is_file() && entry.file_name() == options.file_name {
            debug!(path = %entry.path().display(), "discovered target");
            discovered.targets.push(entry.into_path());
        }
    }
    Ok(discovered)
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name();
    skip_dirs.iter().any(|skip| name == skip.as_str())
}
