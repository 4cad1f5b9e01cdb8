//! Exit code constants for the gog CLI.
//!
//! - 0: Success
//! - 1: Any failure (missing source tree, I/O, template, build hook, server)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any error surfaced by a build or by the dev server.
pub const FAILURE: i32 = 1;
