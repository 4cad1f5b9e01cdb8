//! Filesystem utilities for gog.
//!
//! Directory creation for the output tree and streamed copies of
//! non-HTML source files.

mod copy;
mod ensure;

pub use copy::{copy_stream, create_output};
pub use ensure::ensure_directory;
