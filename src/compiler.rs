//! Compiler resolution
//!
//! This module probes the host environment for an available C compiler and
//! classifies its command-line argument dialect. Probing order is the
//! tie-break policy: the `CC` override beats everything, then `cl`, `gcc`,
//! `clang`, strictly sequential with the first match winning.

use crate::env;
use crate::platform;

/// Argument-grammar family a compiler driver expects.
///
/// Closed set, matched exhaustively everywhere. `None` is the sentinel for
/// "no usable compiler found" and must never reach the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerDialect {
    /// No usable compiler found
    None,
    /// GCC-style: `<cmd> <source> -o <output>` (clang mirrors gcc)
    GccLike,
    /// MSVC-style: `<cmd> <source> /Fe<output>`
    Msvc,
}

/// Resolved compiler: the command to invoke plus its dialect.
/// Produced once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInfo {
    pub command: Option<String>,
    pub dialect: CompilerDialect,
}

impl CompilerInfo {
    fn found(command: impl Into<String>, dialect: CompilerDialect) -> Self {
        Self {
            command: Some(command.into()),
            dialect,
        }
    }

    fn none() -> Self {
        Self {
            command: None,
            dialect: CompilerDialect::None,
        }
    }
}

/// Host probes behind a seam so the priority order is testable without
/// touching the real PATH or the process environment.
pub trait HostProbe {
    /// The preferred-compiler override (`CC`), if set
    fn preferred_compiler(&self) -> Option<String>;
    /// Whether `name` resolves on the command search path
    fn command_exists(&self, name: &str) -> bool;
    /// Whether this host ships the Microsoft toolchain conventions
    fn is_windows(&self) -> bool {
        cfg!(windows)
    }
}

/// The real host environment
pub struct Host;

impl HostProbe for Host {
    fn preferred_compiler(&self) -> Option<String> {
        env::preferred_compiler()
    }

    fn command_exists(&self, name: &str) -> bool {
        platform::command_exists(name)
    }
}

/// Detect an available C compiler on the real host.
pub fn detect_compiler() -> CompilerInfo {
    detect_with(&Host)
}

/// Detection against an arbitrary probe. Strict priority, first match wins:
///
/// 1. `CC` override (POSIX-style hosts only), trusted unconditionally and
///    classified gcc-like without probing its actual dialect
/// 2. `cl` on the search path (Windows only)
/// 3. `gcc` on the search path
/// 4. `clang` on the search path
pub fn detect_with(probe: &impl HostProbe) -> CompilerInfo {
    if !probe.is_windows() {
        if let Some(cc) = probe.preferred_compiler() {
            return CompilerInfo::found(cc, CompilerDialect::GccLike);
        }
    }
    if probe.is_windows() && probe.command_exists("cl") {
        return CompilerInfo::found("cl", CompilerDialect::Msvc);
    }
    if probe.command_exists("gcc") {
        return CompilerInfo::found("gcc", CompilerDialect::GccLike);
    }
    if probe.command_exists("clang") {
        return CompilerInfo::found("clang", CompilerDialect::GccLike);
    }
    CompilerInfo::none()
}
