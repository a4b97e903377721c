//! Test runner implementation (fail-fast)
//!
//! Runs every discovered script with the configured interpreter, one after another, and stops at the first
//! script that does not exit with status 0.
//!
//! ## RunReporter Trait
//!
//! Execution and reporting are separated by the `RunReporter` trait. The binary uses `ConsoleReporter`,
//! which writes the plain-text progress protocol to stdout:
//!
//! ```text
//! /usr/bin/python3 /srv/tests/test_a.py
//! /usr/bin/python3 /srv/tests/test_b.py
//! SUCCESS
//! ```
//!
//! or, on the first failure, a `FAILURE: ...` line instead of `SUCCESS`.
//!
//! ## I/O Boundaries
//!
//! Interpreter lookup, discovery and execution go through the traits in `test_interfaces.rs`, so the
//! orchestration below never touches the filesystem or spawns processes directly.

use std::io::Write;
use std::path::{Path, PathBuf};

use runtests_core::messages;
use runtests_core::{RunOutcome, RunState, ScriptStatus, Session};

use super::config::RunConfig;
use super::test_interfaces::{InterpreterLocator, ScriptDiscovery, ScriptExecutor, TestError};
use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Run Reporter Trait
// ============================================================================

/// Trait for reporting run progress.
pub trait RunReporter {
    /// Called once discovery has produced the plan
    fn on_collection_complete(&mut self, _scripts: &[PathBuf]) {}

    /// Called in `--list` mode for each planned script instead of running it
    fn on_script_listed(&mut self, interpreter: &Path, script: &Path);

    /// Called right before a script is started
    fn on_script_start(&mut self, interpreter: &Path, script: &Path);

    /// Called after a script has exited
    fn on_script_complete(&mut self, _script: &Path, _status: ScriptStatus) {}

    /// Called after `--list` has printed the plan
    fn on_listing_complete(&mut self, count: usize);

    /// Called when every planned script passed
    fn on_run_complete(&mut self, outcome: &RunOutcome);

    /// Called when the run stops early, including on the first failing script
    fn on_run_aborted(&mut self, error: &TestError);
}

/// Writes the progress protocol to any `Write` (stdout in the binary).
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, line: &str) {
        // Children share our stdout, so everything must be flushed before they start.
        let _ = writeln!(self.out, "{line}");
        let _ = self.out.flush();
    }
}

impl<W: Write> RunReporter for ConsoleReporter<W> {
    fn on_collection_complete(&mut self, scripts: &[PathBuf]) {
        tracing::debug!(count = scripts.len(), "collected scripts");
    }

    fn on_script_listed(&mut self, interpreter: &Path, script: &Path) {
        self.line(&messages::command_line(interpreter, script));
    }

    fn on_script_start(&mut self, interpreter: &Path, script: &Path) {
        self.line(&messages::command_line(interpreter, script));
    }

    fn on_script_complete(&mut self, script: &Path, status: ScriptStatus) {
        tracing::debug!(script = %script.display(), %status, "script completed");
    }

    fn on_listing_complete(&mut self, count: usize) {
        self.line(&format!("{count} script(s) collected"));
    }

    fn on_run_complete(&mut self, outcome: &RunOutcome) {
        if outcome.is_success() {
            self.line(messages::success_line());
        }
    }

    fn on_run_aborted(&mut self, error: &TestError) {
        let line = match error {
            TestError::ScriptFailed { script, status } => messages::script_failure_line(script, *status),
            other => messages::failure_line([other.to_string()]),
        };
        self.line(&line);
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Drives one run over the given I/O backends.
pub struct TestRunner<L, D, E> {
    locator: L,
    discovery: D,
    executor: E,
}

impl<L, D, E> TestRunner<L, D, E>
where
    L: InterpreterLocator,
    D: ScriptDiscovery,
    E: ScriptExecutor,
{
    pub fn new(locator: L, discovery: D, executor: E) -> Self {
        Self {
            locator,
            discovery,
            executor,
        }
    }

    /// Run (or list) every script in `config.script_dir`.
    ///
    /// Errors are reported through `reporter` before returning, so the returned `CliError` carries an
    /// empty message and only the exit code matters.
    #[tracing::instrument(skip_all, fields(dir = %config.script_dir.display(), interpreter = %config.interpreter))]
    pub fn run(&self, config: &RunConfig, reporter: &mut dyn RunReporter) -> CliResult<ExitCode> {
        match self.try_run(config, reporter) {
            Ok(Some(outcome)) => {
                reporter.on_run_complete(&outcome);
                Ok(ExitCode::SUCCESS)
            }
            Ok(None) => Ok(ExitCode::SUCCESS),
            Err(error) => {
                tracing::debug!(%error, "run aborted");
                reporter.on_run_aborted(&error);
                Err(CliError::new("", ExitCode::FAILURE))
            }
        }
    }

    /// Returns `None` when only listing.
    fn try_run(&self, config: &RunConfig, reporter: &mut dyn RunReporter) -> Result<Option<RunOutcome>, TestError> {
        // Resolve first: a missing interpreter fails the run even when there is nothing to execute.
        let interpreter = self.locator.locate(&config.interpreter)?;
        let scripts = self.discovery.discover_scripts(&config.script_dir)?;
        reporter.on_collection_complete(&scripts);

        if config.list_only {
            for script in &scripts {
                reporter.on_script_listed(&interpreter, script);
            }
            reporter.on_listing_complete(scripts.len());
            return Ok(None);
        }

        let mut session = Session::new(scripts.len());
        for script in &scripts {
            reporter.on_script_start(&interpreter, script);
            let status = self.executor.execute_script(&interpreter, script)?;
            reporter.on_script_complete(script, status);

            if let RunState::Done(_) = session.record(script, status)? {
                break;
            }
        }

        match session.finish()? {
            RunOutcome::Failure { script, status, .. } => Err(TestError::ScriptFailed { script, status }),
            outcome => Ok(Some(outcome)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
