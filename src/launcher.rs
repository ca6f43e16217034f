//! End-to-end run orchestration
//!
//! Validate input, resolve a compiler, compile into the shared temp
//! artifact, then hand control to the artifact. Each step is a terminal
//! failure point; nothing is retried.

use crate::compiler::{self, CompilerDialect};
use crate::diagnostics::{CrunError, Result};
use crate::invoke;
use crate::platform::{self, Launch};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Artifact subdirectory under the OS temp root
const ARTIFACT_DIR: &str = "crun";
/// Artifact filename. Fixed, not derived from the source file: concurrent
/// runs against different sources overwrite each other, last writer wins.
const ARTIFACT_NAME: &str = "crunbin";

/// One run of the tool: the source path argument plus everything after it.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Path to the C source file, as given on the command line
    pub source: String,
    /// Extra arguments forwarded to the compiled program
    pub extras: Vec<String>,
    /// Print progress lines to stderr
    pub verbose: bool,
}

/// Path of the shared temp artifact: `<temp_root>/crun/crunbin`.
pub fn artifact_path() -> Result<PathBuf> {
    Ok(platform::temp_root()?.join(ARTIFACT_DIR).join(ARTIFACT_NAME))
}

/// Run the full pipeline. Returns the executed program's exit code on the
/// spawn-and-wait path; on the process-replacement path this function only
/// returns on failure.
pub fn run(req: &RunRequest) -> Result<i32> {
    // Validate input before any compiler probing happens
    let source = Path::new(&req.source);
    if !platform::file_exists(source) {
        return Err(CrunError::InputNotFound {
            path: req.source.clone(),
        });
    }

    // Resolve a compiler; an unresolved dialect never reaches the dispatcher
    let info = compiler::detect_compiler();
    let command = match (info.dialect, &info.command) {
        (CompilerDialect::None, _) | (_, None) => return Err(CrunError::NoCompilerDetected),
        (_, Some(cmd)) => cmd.clone(),
    };
    if req.verbose {
        eprintln!(
            "{} {} ({})",
            "Using compiler:".blue(),
            command,
            dialect_name(info.dialect)
        );
    }

    // Prepare the artifact path and its containing directory
    let artifact = artifact_path()?;
    if let Some(parent) = artifact.parent() {
        platform::ensure_dir(parent)?;
    }

    // Compile
    if req.verbose {
        eprintln!("{} {}", "Compiling".blue(), req.source);
    }
    let code = invoke::compile(
        info.dialect,
        &command,
        &req.source,
        &artifact.to_string_lossy(),
    )?;
    if code != 0 {
        return Err(CrunError::CompileFailed);
    }

    // Execute: replacement iff extra arguments were forwarded, otherwise
    // spawn as a child and adopt its exit code
    let launch = if req.extras.is_empty() {
        Launch::SpawnWait
    } else {
        Launch::Replace {
            argv0: req.source.clone(),
            extras: req.extras.clone(),
        }
    };
    if req.verbose {
        eprintln!("{} {}", "Running".green(), artifact.display());
    }
    platform::run_artifact(&artifact, launch)
}

fn dialect_name(dialect: CompilerDialect) -> &'static str {
    match dialect {
        CompilerDialect::GccLike => "gcc-like",
        CompilerDialect::Msvc => "msvc",
        CompilerDialect::None => "none",
    }
}
