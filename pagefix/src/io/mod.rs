//! Filesystem side of the fixer: config, discovery, per-file rewrite.

pub mod config;
pub mod discover;
pub mod page_file;
