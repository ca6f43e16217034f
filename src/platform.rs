//! OS-facing primitives for the launcher
//!
//! This module wraps the handful of platform services the tool needs: the
//! temp-directory root, idempotent directory creation, file and command
//! existence tests, and the two ways of handing control to the compiled
//! artifact (process-image replacement vs spawn-and-wait).

use crate::diagnostics::{CrunError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Return the OS-designated temporary-files directory.
///
/// An empty result is a fatal configuration error for the caller; it must
/// never be silently concatenated into an artifact path.
pub fn temp_root() -> Result<PathBuf> {
    let dir = std::env::temp_dir();
    if dir.as_os_str().is_empty() {
        return Err(CrunError::NoTempDir);
    }
    Ok(dir)
}

/// Idempotent directory creation. Succeeds if the directory already exists;
/// permission or path failures still propagate.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| CrunError::io(path, e))
}

/// True only for an existing regular file (not a directory), queried via
/// metadata without opening the file.
pub fn file_exists(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// True if an executable named `name` resolves on the current search path.
/// Resolution only; the command is never invoked.
pub fn command_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

/// How the compiled artifact is handed control.
///
/// The launcher selects the variant solely on whether extra arguments were
/// forwarded, so an exhaustive match here keeps that fork explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    /// Replace the current process image, forwarding extra arguments.
    /// `argv0` is the original source-path argument slot; the artifact sees
    /// it as its own argv[0].
    Replace { argv0: String, extras: Vec<String> },
    /// Spawn the artifact as a child process with no arguments and wait.
    SpawnWait,
}

/// Run the compiled artifact. On the `Replace` path this only returns on
/// failure; on the `SpawnWait` path it returns the child's exit code.
pub fn run_artifact(exe: &Path, launch: Launch) -> Result<i32> {
    match launch {
        Launch::Replace { argv0, extras } => replace_process(exe, &argv0, &extras),
        Launch::SpawnWait => spawn_wait(exe),
    }
}

#[cfg(unix)]
fn replace_process(exe: &Path, argv0: &str, extras: &[String]) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    let mut cmd = Command::new(exe);
    cmd.arg0(argv0).args(extras);
    // exec only returns on failure; the pid and inherited stdio are
    // preserved on success and no further code runs here.
    let err = cmd.exec();
    Err(CrunError::exec(exe, err))
}

#[cfg(not(unix))]
fn replace_process(exe: &Path, argv0: &str, extras: &[String]) -> Result<i32> {
    // No execv analogue: degrade to spawn-and-wait with the same argument
    // vector. The artifact's argv[0] stays the artifact path here.
    let _ = argv0;
    let status = Command::new(exe)
        .args(extras)
        .status()
        .map_err(|e| CrunError::exec(exe, e))?;
    Ok(exit_code(status))
}

fn spawn_wait(exe: &Path) -> Result<i32> {
    let status = Command::new(exe)
        .status()
        .map_err(|e| CrunError::exec(exe, e))?;
    Ok(exit_code(status))
}

/// Map an exit status to a process exit code. A signal-terminated child has
/// no code; report failure.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
