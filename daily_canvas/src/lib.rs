//! Daily canvas updater.
//!
//! Points every node inside a labelled group of a JSON canvas at today's
//! journal note. The crate keeps the usual split:
//!
//! - **[`core`]**: Pure, deterministic logic (regions, journal naming,
//!   relocation). No I/O, fully testable in isolation.
//! - **[`io`]**: Config, vault lookup, canvas load/save.
//!
//! [`update`] ties the two together for the `daily-canvas update` command.

pub mod canvas;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod update;
