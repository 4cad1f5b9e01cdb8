//! Site building.
//!
//! A build walks `<working_dir>/_src` in sorted order and mirrors every
//! entry into `<working_dir>`: HTML pages are wrapped in `_layout.html`,
//! build hooks are executed, and everything else is copied. The first
//! error stops the walk; output written up to that point is left in place.

mod action;
pub mod config;


pub use action::EntryAction;
pub use config::SiteConfig;

use crate::error::{GogError, Result};
use crate::fs::{copy_stream, create_output, ensure_directory};
use crate::{hook, template};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Counts of what a successful build did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub rendered: usize,
    pub copied: usize,
    pub hooks_run: usize,
    pub skipped: usize,
}

impl BuildReport {
    fn record(&mut self, action: EntryAction) {
        match action {
            EntryAction::Skip => self.skipped += 1,
            EntryAction::RunHook => self.hooks_run += 1,
            EntryAction::RenderHtml => self.rendered += 1,
            EntryAction::Copy => self.copied += 1,
        }
    }
}

/// Build the site rooted at `working_dir`.
///
/// # Returns
///
/// * `Ok(BuildReport)` - Every entry was processed
/// * `Err(GogError::MissingSourceTree)` - No source directory (or `_src` is not a directory)
/// * `Err(GogError::MissingLayout)` - No layout file in the source directory
/// * `Err(_)` - The first I/O, template, or build hook failure
pub fn build(working_dir: &Path, config: &SiteConfig) -> Result<BuildReport> {
    let src_root = working_dir.join(&config.src_dirname);
    if !src_root.is_dir() {
        return Err(GogError::MissingSourceTree(src_root));
    }

    let layout = src_root.join(&config.layout_filename);
    if !layout.exists() {
        return Err(GogError::MissingLayout(layout));
    }

    info!(source = %src_root.display(), "building site");

    let mut report = BuildReport::default();
    for entry in WalkDir::new(&src_root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let context = match e.path() {
                Some(path) => format!("failed to walk '{}'", path.display()),
                None => format!("failed to walk '{}'", src_root.display()),
            };
            GogError::io(context, io::Error::from(e))
        })?;

        let path = entry.path();
        let action = EntryAction::classify(path, entry.file_type().is_dir(), &layout, config);
        debug!(path = %path.display(), action = action.as_str(), "processing entry");

        match action {
            EntryAction::Skip => {}
            EntryAction::RunHook => {
                hook::run_build_hook(path, &config.hook_runner, working_dir)?;
            }
            EntryAction::RenderHtml | EntryAction::Copy => {
                let output = output_path(path, &src_root, working_dir)?;
                write_entry(action, path, &output, &layout)?;
            }
        }
        report.record(action);
    }

    info!(
        rendered = report.rendered,
        copied = report.copied,
        hooks = report.hooks_run,
        "build finished"
    );
    Ok(report)
}

/// Map a path under `src_root` to the same relative path under `working_dir`.
pub fn output_path(path: &Path, src_root: &Path, working_dir: &Path) -> Result<PathBuf> {
    let relative = path.strip_prefix(src_root).map_err(|_| {
        GogError::io(
            format!("failed to map '{}' to the output tree", path.display()),
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is outside '{}'", src_root.display()),
            ),
        )
    })?;
    Ok(working_dir.join(relative))
}

fn write_entry(action: EntryAction, source: &Path, output: &Path, layout: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        ensure_directory(parent)?;
    }

    let mut out = create_output(output)?;

    match action {
        EntryAction::RenderHtml => {
            let content = fs::read(source).map_err(|e| {
                GogError::io(format!("failed to read page '{}'", source.display()), e)
            })?;
            template::render_to(layout, &content, &mut out)
        }
        _ => copy_stream(source, &mut out).map(|_| ()),
    }
}
