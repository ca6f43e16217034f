//! crun - run a single C source file like a script.
//!
//! Locates a C compiler on the host, compiles the given source file into a
//! shared temp-directory artifact, and executes the artifact, forwarding any
//! extra command-line arguments.

pub mod compiler;
pub mod diagnostics;
pub mod env;
pub mod invoke;
pub mod launcher;
pub mod platform;
