//! End-to-end tests for the `runtests` binary.
//!
//! Scripts are plain shell so the suite does not need Python: each scenario points `--interpreter` at
//! `/bin/sh` and names the scripts `test_*.py` so discovery picks them up.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const SH: &str = "/bin/sh";

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn runtests() -> Command {
    let mut cmd = Command::cargo_bin("runtests").unwrap();
    cmd.env_remove("RUNTESTS_DIR")
        .env_remove("RUNTESTS_INTERPRETER")
        .env_remove("RUST_LOG");
    cmd
}

fn progress(dir: &Path, name: &str) -> String {
    format!("{SH} {}\n", dir.join(name).display())
}

#[test]
fn all_passing_scripts_end_with_success() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "test_a.py", "exit 0\n");
    write_script(dir.path(), "test_b.py", "exit 0\n");

    let expected = format!(
        "{}{}SUCCESS\n",
        progress(dir.path(), "test_a.py"),
        progress(dir.path(), "test_b.py")
    );

    runtests()
        .arg("--interpreter")
        .arg(SH)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn failing_script_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "test_a.py", "exit 0\n");
    write_script(dir.path(), "test_b.py", "exit 3\n");
    write_script(dir.path(), "test_c.py", "touch \"$(dirname \"$0\")/c_ran\"\n");

    let expected = format!(
        "{}{}FAILURE: {} exited with status 3\n",
        progress(dir.path(), "test_a.py"),
        progress(dir.path(), "test_b.py"),
        dir.path().join("test_b.py").display()
    );

    runtests()
        .arg("--interpreter")
        .arg(SH)
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::diff(expected));

    assert!(!dir.path().join("c_ran").exists(), "scripts after the failure must not run");
}

#[test]
fn empty_directory_prints_only_success() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "helper.py", "exit 1\n");

    runtests()
        .arg("--interpreter")
        .arg(SH)
        .arg(dir.path())
        .assert()
        .success()
        .stdout("SUCCESS\n");
}

#[test]
fn missing_interpreter_fails_without_running_scripts() {
    let dir = tempfile::tempdir().unwrap();
    let empty_path = tempfile::tempdir().unwrap();
    write_script(dir.path(), "test_a.py", "touch \"$(dirname \"$0\")/a_ran\"\n");

    runtests()
        .env("PATH", empty_path.path())
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout("FAILURE: interpreter `python3` not found\n");

    assert!(!dir.path().join("a_ran").exists());
}

#[test]
fn missing_interpreter_fails_even_for_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let empty_path = tempfile::tempdir().unwrap();

    runtests()
        .env("PATH", empty_path.path())
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("SUCCESS").not());
}

#[test]
fn child_output_follows_its_progress_line() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "test_a.py", "echo hello from a\n");
    write_script(dir.path(), "test_b.py", "echo hello from b\n");

    let expected = format!(
        "{}hello from a\n{}hello from b\nSUCCESS\n",
        progress(dir.path(), "test_a.py"),
        progress(dir.path(), "test_b.py")
    );

    runtests()
        .arg("--interpreter")
        .arg(SH)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn environment_supplies_directory_and_interpreter() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "test_a.py", "exit 0\n");

    runtests()
        .env("RUNTESTS_DIR", dir.path())
        .env("RUNTESTS_INTERPRETER", SH)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}SUCCESS\n", progress(dir.path(), "test_a.py"))));
}

#[test]
fn interpreter_name_is_found_on_path() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "test_a.py", "exit 0\n");

    runtests()
        .env("PATH", "/bin")
        .arg("--interpreter")
        .arg("sh")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("SUCCESS\n"));
}

#[test]
fn list_mode_runs_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "test_a.py", "touch \"$(dirname \"$0\")/a_ran\"\n");

    runtests()
        .arg("--interpreter")
        .arg(SH)
        .arg("--list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}1 script(s) collected\n",
            progress(dir.path(), "test_a.py")
        )));

    assert!(!dir.path().join("a_ran").exists());
}

#[test]
fn unreadable_directory_is_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    runtests()
        .arg("--interpreter")
        .arg(SH)
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(format!(
            "FAILURE: cannot read script directory {}",
            missing.display()
        )));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["test_c.py", "test_a.py", "test_b.py"] {
        write_script(dir.path(), name, "exit 0\n");
    }

    let run = || {
        runtests()
            .arg("--interpreter")
            .arg(SH)
            .arg(dir.path())
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn unknown_flags_are_usage_errors() {
    runtests().arg("--parallel").assert().code(2);
}

#[test]
fn real_python_scripts_when_available() {
    let search_path = std::env::var_os("PATH");
    let Some(python) = runtests::cli::interpreter::find_on_search_path("python3", search_path.as_deref()) else {
        return; // Skip if python3 is not installed
    };

    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "test_ok.py", "import sys\nsys.exit(0)\n");
    write_script(dir.path(), "test_zz_fails.py", "raise SystemExit(4)\n");

    let expected = format!(
        "{} {}\n{} {}\nFAILURE: {} exited with status 4\n",
        python.display(),
        dir.path().join("test_ok.py").display(),
        python.display(),
        dir.path().join("test_zz_fails.py").display(),
        dir.path().join("test_zz_fails.py").display()
    );

    runtests()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::diff(expected));
}
