//! Environment variable name constants and accessors
//!
//! This module centralizes all environment variable names used throughout
//! the codebase so it is obvious what the tool reads from its environment.
//!
//! All environment variables should be accessed through the functions in
//! this module rather than using `std::env::var()` directly.

/// Environment variable names
pub mod names {
    /// Preferred C compiler: `CC`
    /// When set (POSIX-style hosts only), it bypasses all search-path
    /// probing and is trusted unconditionally as a gcc-like driver.
    pub const CC: &str = "CC";

    /// Verbose progress output: `CRUN_VERBOSE`
    /// Set to any value to enable the same output as `--verbose`.
    pub const VERBOSE: &str = "CRUN_VERBOSE";
}

/// Get the preferred C compiler command from the environment.
/// Returns `None` if unset or set to an empty string.
pub fn preferred_compiler() -> Option<String> {
    std::env::var(names::CC).ok().filter(|v| !v.is_empty())
}

/// Check if verbose output is enabled via the environment
pub fn is_verbose() -> bool {
    std::env::var(names::VERBOSE).is_ok()
}
