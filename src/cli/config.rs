//! Run configuration.
//!
//! Everything the runner needs from its environment (where the scripts live, which interpreter to use, in
//! what order to run) is resolved here into a plain [`RunConfig`] before any work starts.

use std::env;
use std::fmt;
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use runtests_core::conventions::DEFAULT_INTERPRETER;

use super::Cli;
use super::test_interfaces::TestError;

/// Which interpreter to run scripts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterSpec {
    /// Bare executable name looked up on the search path.
    Search(String),
    /// Path used as-is.
    Explicit(PathBuf),
}

impl Default for InterpreterSpec {
    fn default() -> Self {
        InterpreterSpec::Search(DEFAULT_INTERPRETER.to_string())
    }
}

impl InterpreterSpec {
    /// Names containing a path separator are paths; anything else is searched for.
    pub fn parse(value: &str) -> Self {
        if value.contains(MAIN_SEPARATOR) || value.contains('/') {
            InterpreterSpec::Explicit(PathBuf::from(value))
        } else {
            InterpreterSpec::Search(value.to_string())
        }
    }
}

impl fmt::Display for InterpreterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpreterSpec::Search(name) => write!(f, "{name}"),
            InterpreterSpec::Explicit(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Order in which discovered scripts run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryOrder {
    /// Sorted by path, identical across filesystems.
    #[default]
    Sorted,
    /// Whatever the directory listing yields.
    Filesystem,
}

/// Fully resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub script_dir: PathBuf,
    pub interpreter: InterpreterSpec,
    pub order: DiscoveryOrder,
    /// Print the planned commands without running them.
    pub list_only: bool,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, TestError> {
        let script_dir = match &cli.dir {
            Some(dir) => dir.clone(),
            None => runner_dir()?,
        };

        let interpreter = cli
            .interpreter
            .as_deref()
            .map(InterpreterSpec::parse)
            .unwrap_or_default();

        let order = if cli.fs_order {
            DiscoveryOrder::Filesystem
        } else {
            DiscoveryOrder::Sorted
        };

        Ok(Self {
            script_dir,
            interpreter,
            order,
            list_only: cli.list,
        })
    }
}

/// Directory containing the running executable.
pub fn runner_dir() -> Result<PathBuf, TestError> {
    let exe = env::current_exe().map_err(TestError::RunnerLocation)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        TestError::RunnerLocation(io::Error::other(format!(
            "{} has no parent directory",
            exe.display()
        )))
    })
}
