//! Per-entry dispatch for the site walk.

use super::config::{HTML_EXTENSION, SiteConfig};
use std::ffi::OsStr;
use std::path::Path;

/// What the builder does with one walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// Directories and the layout file produce no output.
    Skip,
    /// Execute the entry as a build hook.
    RunHook,
    /// Render the entry through the layout.
    RenderHtml,
    /// Copy the entry byte for byte.
    Copy,
}

impl EntryAction {
    /// Classify an entry under the source tree.
    ///
    /// `layout` is the full layout path; `path` is compared against it as-is,
    /// so both must be built from the same source root.
    pub fn classify(path: &Path, is_dir: bool, layout: &Path, config: &SiteConfig) -> Self {
        if is_dir || path == layout {
            return EntryAction::Skip;
        }

        if path.file_name() == Some(OsStr::new(&config.hook_marker)) {
            return EntryAction::RunHook;
        }

        if path.extension() == Some(OsStr::new(HTML_EXTENSION)) {
            EntryAction::RenderHtml
        } else {
            EntryAction::Copy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryAction::Skip => "skip",
            EntryAction::RunHook => "run-hook",
            EntryAction::RenderHtml => "render",
            EntryAction::Copy => "copy",
        }
    }
}
