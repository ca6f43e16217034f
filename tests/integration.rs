use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Whether the host has a gcc-like C compiler for the end-to-end tests.
/// Detection-only tests below do not need one.
fn have_c_compiler() -> bool {
    crun::platform::command_exists("gcc") || crun::platform::command_exists("clang")
}

/// A crun invocation with a private temp root so parallel tests cannot
/// overwrite each other's `crun/crunbin` artifact.
fn crun_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("crun").expect("crun binary");
    cmd.env("TMPDIR", temp.path());
    cmd.env_remove("CC");
    cmd
}

fn write_source(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn no_input_file_fails_with_usage() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    crun_cmd(&temp)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ERROR: No input file"));
    Ok(())
}

#[test]
fn missing_source_path_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    crun_cmd(&temp)
        .arg("no-such-file.c")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "ERROR: File does not exist: no-such-file.c",
        ));
    Ok(())
}

#[test]
fn exit_code_of_artifact_is_forwarded() -> Result<(), Box<dyn std::error::Error>> {
    if !have_c_compiler() {
        return Ok(());
    }
    let temp = TempDir::new()?;
    let src = write_source(temp.path(), "ret42.c", "int main(void) { return 42; }\n");

    crun_cmd(&temp).arg(&src).assert().code(42);
    Ok(())
}

#[test]
fn extra_arguments_reach_the_artifact() -> Result<(), Box<dyn std::error::Error>> {
    if !have_c_compiler() {
        return Ok(());
    }
    let temp = TempDir::new()?;
    // Echo the entire argv, one entry per line, argv[0] included
    let src = write_source(
        temp.path(),
        "echoargv.c",
        r#"#include <stdio.h>
int main(int argc, char** argv) {
    for (int i = 0; i < argc; i++) printf("%s\n", argv[i]);
    return 0;
}
"#,
    );

    // The artifact's argv[0] is the original source-path argument slot,
    // followed by the forwarded extras
    let expected = format!("{}\n--flag\nvalue\n", src);
    crun_cmd(&temp)
        .arg(&src)
        .arg("--flag")
        .arg("value")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
    Ok(())
}

#[test]
fn compilation_failure_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    if !have_c_compiler() {
        return Ok(());
    }
    let temp = TempDir::new()?;
    let src = write_source(temp.path(), "broken.c", "int main(void) { return oops; }\n");

    crun_cmd(&temp)
        .arg(&src)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "ERROR: Compilation failed or compiled with warnings",
        ));
    Ok(())
}

#[test]
fn rerun_overwrites_the_shared_artifact() -> Result<(), Box<dyn std::error::Error>> {
    if !have_c_compiler() {
        return Ok(());
    }
    let temp = TempDir::new()?;
    let src = write_source(temp.path(), "ok.c", "int main(void) { return 7; }\n");

    crun_cmd(&temp).arg(&src).assert().code(7);
    // Second run recompiles into the same fixed path without error
    crun_cmd(&temp).arg(&src).assert().code(7);
    assert!(temp.path().join("crun").join("crunbin").is_file());
    Ok(())
}

#[test]
fn cc_override_is_trusted_unconditionally() -> Result<(), Box<dyn std::error::Error>> {
    if cfg!(windows) {
        return Ok(());
    }
    let temp = TempDir::new()?;
    let src = write_source(temp.path(), "any.c", "int main(void) { return 0; }\n");

    // A bogus CC is still selected over any real compiler on the PATH, so
    // the run reaches the compile step and fails there, not at detection
    crun_cmd(&temp)
        .env("CC", "crun-no-such-compiler")
        .arg(&src)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "ERROR: Compilation failed or compiled with warnings",
        ));
    Ok(())
}

#[test]
fn program_output_passes_through() -> Result<(), Box<dyn std::error::Error>> {
    if !have_c_compiler() {
        return Ok(());
    }
    let temp = TempDir::new()?;
    let src = write_source(
        temp.path(),
        "hello.c",
        r#"#include <stdio.h>
int main(void) { printf("hello from crun\n"); return 0; }
"#,
    );

    crun_cmd(&temp)
        .arg(&src)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from crun"));
    Ok(())
}
