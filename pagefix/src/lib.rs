//! Repair duplicated and mismatched wrapper tags in generated page files.
//!
//! The crate separates pure logic from side effects:
//!
//! - **[`core`]**: Pure rewrite rules and outcome types. No filesystem access.
//! - **[`io`]**: Config loading, target discovery, per-file read/rewrite/write.
//!
//! [`fix`] wires the two together for the `pagefix` binary.

pub mod core;
pub mod exit_codes;
pub mod fix;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
