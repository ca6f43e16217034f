//! Main entry point for crun.
//!
//! Parses the CLI surface, then delegates the whole pipeline to the
//! launcher. Every fatal condition becomes a single `ERROR:`-prefixed line
//! on stderr and exit code 1; otherwise the executed program's exit code
//! becomes this tool's own.

use atty::Stream as AtStream;
use clap::Parser;
use colored::Colorize;

use crun::diagnostics::CrunError;
use crun::launcher::{self, RunRequest};

#[derive(Parser)]
#[command(
    name = "crun",
    about = "Compile and run a single C source file like a script",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Print verbose progress information (also CRUN_VERBOSE)
    #[arg(long)]
    verbose: bool,

    /// Force color output: auto, always, never
    #[arg(long)]
    color: Option<String>,

    /// Path to the C source file to compile and run
    src: Option<String>,

    /// Arguments forwarded to the compiled program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // color handling: always/never/auto (auto = enable when stderr is a TTY)
    let enable_color = match cli.color.as_deref() {
        Some("always") => true,
        Some("never") => false,
        Some("auto") | None => atty::is(AtStream::Stderr),
        _ => atty::is(AtStream::Stderr),
    };
    colored::control::set_override(enable_color);

    let verbose = cli.verbose || crun::env::is_verbose();

    let Some(source) = cli.src else {
        fail(&CrunError::Usage);
        eprintln!("Usage: crun <source-file> [extra-args...]");
        std::process::exit(1);
    };

    let req = RunRequest {
        source,
        extras: cli.args,
        verbose,
    };
    match launcher::run(&req) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            fail(&e);
            std::process::exit(1);
        }
    }
}

fn fail(err: &CrunError) {
    eprintln!("{} {}", "ERROR:".red().bold(), err);
}
