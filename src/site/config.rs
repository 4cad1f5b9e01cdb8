//! Fixed names that define a gog site layout.

/// Source directory, relative to the working directory.
pub const SRC_DIRNAME: &str = "_src";

/// Layout template, relative to the source directory.
pub const LAYOUT_FILENAME: &str = "_layout.html";

/// File name that marks a build hook anywhere in the source tree.
pub const HOOK_MARKER: &str = "GOG_BUILD.go";

/// Command used to run build hooks; the script path is appended.
pub const HOOK_RUNNER: &str = "go run";

/// Extension of files rendered through the layout.
pub const HTML_EXTENSION: &str = "html";

/// Names and commands used by a build.
///
/// Production builds always use [`SiteConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub src_dirname: String,
    pub layout_filename: String,
    pub hook_marker: String,
    pub hook_runner: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            src_dirname: SRC_DIRNAME.to_string(),
            layout_filename: LAYOUT_FILENAME.to_string(),
            hook_marker: HOOK_MARKER.to_string(),
            hook_runner: HOOK_RUNNER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_named_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.src_dirname, "_src");
        assert_eq!(config.layout_filename, "_layout.html");
        assert_eq!(config.hook_marker, "GOG_BUILD.go");
        assert_eq!(config.hook_runner, "go run");
    }
}
