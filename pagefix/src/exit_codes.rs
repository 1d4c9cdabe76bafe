//! Stable exit codes for the `pagefix` CLI.

/// Run completed. Per-file errors are reported but do not change the code.
pub const OK: i32 = 0;
/// Run aborted: invalid config, unreadable root, or a traversal failure.
pub const INVALID: i32 = 1;
/// `--check` found at least one file that would be rewritten.
pub const PENDING: i32 = 2;
