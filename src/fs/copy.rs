//! Output file creation and streamed copies.

use crate::error::{GogError, Result};
use std::fs::File;
use std::io;
use std::path::Path;

/// Create (or truncate) the output file at `path`.
pub fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| {
        GogError::io(
            format!("failed to create output file '{}'", path.display()),
            e,
        )
    })
}

/// Stream the contents of `source` into `out` without buffering the whole file.
///
/// Returns the number of bytes copied.
pub fn copy_stream(source: &Path, out: &mut File) -> Result<u64> {
    let mut input = File::open(source).map_err(|e| {
        GogError::io(
            format!("failed to open source file '{}'", source.display()),
            e,
        )
    })?;

    io::copy(&mut input, out)
        .map_err(|e| GogError::io(format!("failed to copy '{}'", source.display()), e))
}
