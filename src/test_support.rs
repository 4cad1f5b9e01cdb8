use crate::site::SiteConfig;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) const TEST_LAYOUT: &str = "<!doctype html>\n<body>\n{{.Content}}\n</body>\n";

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A working directory with `_src/_layout.html` in place.
pub(crate) fn create_test_site() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_source(temp_dir.path(), "_layout.html", TEST_LAYOUT);
    temp_dir
}

/// Write `content` to `_src/<relative>`, creating parent directories.
pub(crate) fn write_source(working_dir: &Path, relative: &str, content: impl AsRef<[u8]>) {
    let path = working_dir.join("_src").join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Site config whose build hooks are POSIX shell scripts, so tests don't need Go.
pub(crate) fn shell_hook_config() -> SiteConfig {
    SiteConfig {
        hook_marker: "GOG_BUILD.sh".to_string(),
        hook_runner: "sh".to_string(),
        ..SiteConfig::default()
    }
}
