//! Build hook execution.
//!
//! A source tree may embed a build script (`GOG_BUILD.go` by default). It is
//! executed with the configured runner instead of being copied. Only the
//! child's stderr reaches the terminal; stdout is discarded.

use crate::error::{GogError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, trace};

/// Run the build hook at `script` using `runner` (e.g. `go run`).
///
/// The runner string is split like a shell would split it and the script
/// path is appended as the final argument. The child runs in `working_dir`.
///
/// # Returns
///
/// * `Ok(())` - The hook exited with status zero
/// * `Err(GogError::BuildHookFailed)` - Bad runner, spawn failure, or non-zero exit
pub fn run_build_hook(script: &Path, runner: &str, working_dir: &Path) -> Result<()> {
    let fail = |reason: String| GogError::BuildHookFailed {
        script: script.to_path_buf(),
        reason,
    };

    let args = shell_words::split(runner.trim())
        .map_err(|e| fail(format!("failed to parse runner '{}': {}", runner, e)))?;
    let (program, runner_args) = args
        .split_first()
        .ok_or_else(|| fail("runner command is empty".to_string()))?;

    trace!(program = %program, args = ?runner_args, script = %script.display(), "spawning build hook");

    let status = Command::new(program)
        .args(runner_args)
        .arg(script)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            fail(format!(
                "failed to execute '{}': {}\nFix: ensure the runner is installed and in PATH.",
                program, e
            ))
        })?;

    debug!(script = %script.display(), %status, "build hook finished");

    if status.success() {
        Ok(())
    } else {
        Err(fail(describe_status(status)))
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with code {}", code),
        None => "terminated by signal".to_string(),
    }
}
