//! Test runner I/O boundary interfaces
//!
//! This module defines trait-based abstractions for the three places the runner touches the outside world:
//! - Interpreter lookup (search path or explicit path)
//! - Script discovery (directory scan)
//! - Script execution (one blocking child process per script)
//!
//! The orchestration in `test_runner` only talks to these traits, so it can be driven by in-memory fakes in
//! tests. The `Default*`/`Process*` implementations are what the binary uses.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use runtests_core::conventions::SEARCH_PATH_ENV;
use runtests_core::{ScriptPattern, ScriptStatus, SessionError};
use thiserror::Error;

use super::config::{DiscoveryOrder, InterpreterSpec};
use super::interpreter;

/// Errors that end a run early
#[derive(Debug, Error)]
pub enum TestError {
    #[error("interpreter `{name}` not found")]
    InterpreterNotFound { name: String },

    #[error("{} {status}", script.display())]
    ScriptFailed { script: PathBuf, status: ScriptStatus },

    #[error("cannot read script directory {}: {source}", dir.display())]
    Discovery {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} could not be started with {}: {source}", script.display(), interpreter.display())]
    Spawn {
        interpreter: PathBuf,
        script: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine the runner's own directory: {0}")]
    RunnerLocation(#[source] io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

// ============================================================================
// Interpreter Locator Interface
// ============================================================================

/// Turn the configured interpreter into a concrete executable path.
pub trait InterpreterLocator {
    fn locate(&self, spec: &InterpreterSpec) -> Result<PathBuf, TestError>;
}

// ============================================================================
// Script Discovery Interface
// ============================================================================

/// Find the scripts to run, in the order they will run.
pub trait ScriptDiscovery {
    fn discover_scripts(&self, dir: &Path) -> Result<Vec<PathBuf>, TestError>;
}

// ============================================================================
// Script Executor Interface
// ============================================================================

/// Run one script to completion.
///
/// Implementations block until the script has finished. There is no timeout: a script that never exits
/// stalls the whole run.
pub trait ScriptExecutor {
    fn execute_script(&self, interpreter: &Path, script: &Path) -> Result<ScriptStatus, TestError>;
}

// ============================================================================
// Default Implementations
// ============================================================================

/// Looks bare names up on a search path captured once at startup.
#[derive(Debug, Clone, Default)]
pub struct SearchPathLocator {
    search_path: Option<OsString>,
}

impl SearchPathLocator {
    pub fn new(search_path: Option<OsString>) -> Self {
        Self { search_path }
    }

    /// Capture `PATH` from the process environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(SEARCH_PATH_ENV))
    }
}

impl InterpreterLocator for SearchPathLocator {
    fn locate(&self, spec: &InterpreterSpec) -> Result<PathBuf, TestError> {
        let found = match spec {
            InterpreterSpec::Search(name) => {
                interpreter::find_on_search_path(name, self.search_path.as_deref())
            }
            InterpreterSpec::Explicit(path) => interpreter::is_executable(path).then(|| path.clone()),
        };

        match found {
            Some(path) => {
                tracing::debug!(interpreter = %path.display(), "resolved interpreter");
                Ok(path)
            }
            None => Err(TestError::InterpreterNotFound {
                name: spec.to_string(),
            }),
        }
    }
}

/// Non-recursive directory scan filtered by [`ScriptPattern`].
#[derive(Debug, Clone, Default)]
pub struct DefaultScriptDiscovery {
    pattern: ScriptPattern,
    order: DiscoveryOrder,
}

impl DefaultScriptDiscovery {
    pub fn new(order: DiscoveryOrder) -> Self {
        Self {
            pattern: ScriptPattern::default(),
            order,
        }
    }
}

impl ScriptDiscovery for DefaultScriptDiscovery {
    #[tracing::instrument(skip_all, fields(dir = %dir.display(), pattern = %self.pattern))]
    fn discover_scripts(&self, dir: &Path) -> Result<Vec<PathBuf>, TestError> {
        let entries = fs::read_dir(dir).map_err(|source| TestError::Discovery {
            dir: dir.to_path_buf(),
            source,
        })?;

        let mut scripts = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };

            let path = entry.path();
            if !self.pattern.matches_path(&path) {
                continue;
            }
            // Follows symlinks, so a link to a script counts as a script.
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "skipping non-file match");
                continue;
            }
            scripts.push(path);
        }

        if self.order == DiscoveryOrder::Sorted {
            scripts.sort();
        }

        tracing::debug!(count = scripts.len(), order = ?self.order, "discovered scripts");
        Ok(scripts)
    }
}

/// Spawns the interpreter with inherited standard streams and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ScriptExecutor for ProcessExecutor {
    fn execute_script(&self, interpreter: &Path, script: &Path) -> Result<ScriptStatus, TestError> {
        let status = Command::new(interpreter)
            .arg(script)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| TestError::Spawn {
                interpreter: interpreter.to_path_buf(),
                script: script.to_path_buf(),
                source,
            })?;

        let status = ScriptStatus::from(status.code());
        tracing::debug!(script = %script.display(), ?status, "script finished");
        Ok(status)
    }
}

// ============================================================================
// Tests
// ============================================================================
