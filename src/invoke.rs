//! Compile strategy dispatch
//!
//! This module maps a compiler dialect to the invocation grammar it expects
//! and runs the resulting command line through the platform shell, blocking
//! until the compiler exits. Compiler stdout/stderr are inherited so the
//! user sees diagnostics directly.

use crate::compiler::CompilerDialect;
use crate::diagnostics::{CrunError, Result};
use crate::platform;
use std::process::Command;

/// Build the compiler invocation string for a dialect.
///
/// Caller contract: the launcher never dispatches an unresolved compiler,
/// so `CompilerDialect::None` is unreachable here.
pub fn format_invocation(
    dialect: CompilerDialect,
    command: &str,
    source: &str,
    output: &str,
) -> String {
    match dialect {
        CompilerDialect::GccLike => format!("{} {} -o {}", command, source, output),
        // MSVC's /Fe flag takes its argument with no separating space
        CompilerDialect::Msvc => format!("{} {} /Fe{}", command, source, output),
        CompilerDialect::None => unreachable!("unresolved compiler reached the dispatcher"),
    }
}

/// Invoke the compiler synchronously and return its raw exit code.
/// Nonzero means "compilation failed", with no distinction between errors
/// and warnings the compiler treats as nonzero exit.
pub fn compile(
    dialect: CompilerDialect,
    command: &str,
    source: &str,
    output: &str,
) -> Result<i32> {
    let invocation = format_invocation(dialect, command, source, output);
    let status = shell_command(&invocation)
        .status()
        .map_err(|e| CrunError::other(format!("Failed to launch compiler: {}", e)))?;
    Ok(platform::exit_code(status))
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}
