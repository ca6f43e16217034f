//! Diagnostics for the crun CLI
//!
//! This module defines the centralized error handling for the crun tool.
//! All fallible operations return `Result<T>` where the error type is
//! `CrunError`. Every variant is fatal for the current run: the CLI surfaces
//! it as a single `ERROR:`-prefixed line on stderr and exits nonzero.

use std::path::PathBuf;

/// Result type alias for all fallible operations
pub type Result<T> = std::result::Result<T, CrunError>;

/// Semantic error type for every way a run can fail.
///
/// The taxonomy deliberately stays coarse: "compiler reported errors" and
/// "compiler exited nonzero on warnings" both collapse into
/// `CompileFailed`, matching what the underlying compiler exit code can
/// actually tell us.
#[derive(Debug, thiserror::Error)]
pub enum CrunError {
    /// No source file argument was supplied
    #[error("No input file")]
    Usage,

    /// The source path does not name an existing regular file
    #[error("File does not exist: {path}")]
    InputNotFound { path: String },

    /// No usable C compiler was found on the host
    #[error("No compiler detected!")]
    NoCompilerDetected,

    /// The compiler exited nonzero (errors, or warnings-as-errors)
    #[error("Compilation failed or compiled with warnings")]
    CompileFailed,

    /// The compiled artifact could not be launched or exec'd
    #[error("Failed to execute {path:?}: {source}")]
    ExecFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OS did not supply a usable temporary-files directory
    #[error("No temporary directory available on this host")]
    NoTempDir,

    /// I/O error for a specific path
    #[error("I/O error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic error for other failures
    #[error("{message}")]
    Other { message: String },
}

impl CrunError {
    /// Create an I/O error with path context
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        CrunError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an exec failure with path context
    pub fn exec<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        CrunError::ExecFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(message: S) -> Self {
        CrunError::Other {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_cli_wording() {
        assert_eq!(CrunError::Usage.to_string(), "No input file");
        assert_eq!(
            CrunError::NoCompilerDetected.to_string(),
            "No compiler detected!"
        );
        assert_eq!(
            CrunError::CompileFailed.to_string(),
            "Compilation failed or compiled with warnings"
        );
        assert_eq!(
            CrunError::InputNotFound {
                path: "missing.c".to_string()
            }
            .to_string(),
            "File does not exist: missing.c"
        );
    }
}
