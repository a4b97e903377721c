//! CLI module for the runtests script runner
//!
//! `runtests [DIR]` runs every `test_*.py` script in `DIR` (by default the directory containing the
//! `runtests` executable) with `python3`, stopping at the first failure.
//!
//! ## Modules
//!
//! - `config` - Turn parsed arguments into a `RunConfig`
//! - `interpreter` - Search-path lookup
//! - `test_interfaces` - I/O boundary traits and their default implementations
//! - `test_runner` - Fail-fast orchestration and console reporting
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod interpreter;
pub mod test_interfaces;
pub mod test_runner;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use runtests_core::conventions::{EXIT_FAILURE, EXIT_SUCCESS, INTERPRETER_ENV, SCRIPT_DIR_ENV};
use runtests_core::messages;

use config::RunConfig;
use test_interfaces::{DefaultScriptDiscovery, ProcessExecutor, SearchPathLocator, TestError};
use test_runner::{ConsoleReporter, TestRunner};

use crate::version::RUNTESTS_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(EXIT_SUCCESS);
    pub const FAILURE: ExitCode = ExitCode(EXIT_FAILURE);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (empty when a reporter already printed it)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<TestError> for CliError {
    fn from(error: TestError) -> Self {
        CliError::failure(error.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Run test_*.py scripts one by one, stopping at the first failure
#[derive(Parser, Debug)]
#[command(name = "runtests")]
#[command(version = RUNTESTS_VERSION)]
#[command(about = "Run test_*.py scripts one by one, stopping at the first failure", long_about = None)]
pub struct Cli {
    /// Directory to search for test_*.py scripts (default: the directory containing this executable)
    #[arg(value_name = "DIR", env = SCRIPT_DIR_ENV)]
    pub dir: Option<PathBuf>,

    /// Interpreter to run scripts with; bare names are looked up on PATH
    #[arg(long, value_name = "PATH|NAME", env = INTERPRETER_ENV)]
    pub interpreter: Option<String>,

    /// Keep directory listing order instead of sorting scripts by name
    #[arg(long = "fs-order")]
    pub fs_order: bool,

    /// Print the commands that would run, without running them
    #[arg(long)]
    pub list: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            // stdout is the only reporting channel, errors included.
            if !e.message.is_empty() {
                println!("{}", messages::failure_line([e.message.as_str()]));
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = RunConfig::from_cli(&cli)?;
    tracing::debug!(?config, "starting run");

    let runner = TestRunner::new(
        SearchPathLocator::from_env(),
        DefaultScriptDiscovery::new(config.order),
        ProcessExecutor,
    );
    let mut reporter = ConsoleReporter::new(io::stdout());
    runner.run(&config, &mut reporter)
}

// ============================================================================
// Tests
// ============================================================================
