//! Pure text-rewriting logic and outcome types.
//!
//! Core modules must be free of filesystem side effects so the rewrite rules
//! can be tested on in-memory strings.

pub mod rewrite;
pub mod types;
