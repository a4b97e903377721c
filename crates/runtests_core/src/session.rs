//! Fail-fast run state machine.
//!
//! A [`Session`] is created with the number of planned scripts and fed one [`ScriptStatus`] per executed
//! script. It has exactly two states:
//!
//! - `Running`: scripts remain and none has failed.
//! - `Done`: either the first non-zero status was recorded (failure) or the last planned script succeeded
//!   (success). An empty plan starts out `Done` with a success.
//!
//! `Done` is absorbing. Recording into a finished session is a caller bug and is reported as
//! [`SessionError::AlreadyFinished`] rather than a panic.

use std::fmt;
use std::path::{Path, PathBuf};

/// How a single script process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    /// Normal exit with the given code.
    Exited(i32),
    /// Ended without an exit code (killed by a signal on Unix).
    Signaled,
}

impl ScriptStatus {
    pub fn success(&self) -> bool {
        matches!(self, ScriptStatus::Exited(0))
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            ScriptStatus::Exited(code) => Some(*code),
            ScriptStatus::Signaled => None,
        }
    }
}

impl From<Option<i32>> for ScriptStatus {
    fn from(code: Option<i32>) -> Self {
        code.map_or(ScriptStatus::Signaled, ScriptStatus::Exited)
    }
}

impl fmt::Display for ScriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStatus::Exited(code) => write!(f, "exited with status {code}"),
            ScriptStatus::Signaled => write!(f, "was terminated by a signal"),
        }
    }
}

/// Final result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every planned script exited with status 0.
    Success { scripts: usize },
    /// `script` (1-based `position` in the plan) was the first to fail.
    Failure {
        script: PathBuf,
        position: usize,
        status: ScriptStatus,
    },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Running { completed: usize },
    Done(RunOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A status was recorded after the session reached `Done`.
    AlreadyFinished { script: PathBuf },
    /// The session was finished while planned scripts were still unaccounted for.
    Incomplete { completed: usize, planned: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::AlreadyFinished { script } => {
                write!(f, "run already finished; cannot record result for {}", script.display())
            }
            SessionError::Incomplete { completed, planned } => {
                write!(f, "run ended after {completed} of {planned} scripts")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Tracks progress through a planned sequence of scripts.
#[derive(Debug, Clone)]
pub struct Session {
    planned: usize,
    state: RunState,
}

impl Session {
    pub fn new(planned: usize) -> Self {
        let state = if planned == 0 {
            RunState::Done(RunOutcome::Success { scripts: 0 })
        } else {
            RunState::Running { completed: 0 }
        };
        Self { planned, state }
    }

    pub fn planned(&self) -> usize {
        self.planned
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, RunState::Done(_))
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        match &self.state {
            RunState::Done(outcome) => Some(outcome),
            RunState::Running { .. } => None,
        }
    }

    /// Record how `script` ended and advance the state machine.
    pub fn record(&mut self, script: &Path, status: ScriptStatus) -> Result<&RunState, SessionError> {
        let completed = match self.state {
            RunState::Running { completed } => completed,
            RunState::Done(_) => {
                return Err(SessionError::AlreadyFinished {
                    script: script.to_path_buf(),
                });
            }
        };

        self.state = if !status.success() {
            RunState::Done(RunOutcome::Failure {
                script: script.to_path_buf(),
                position: completed + 1,
                status,
            })
        } else if completed + 1 >= self.planned {
            RunState::Done(RunOutcome::Success {
                scripts: completed + 1,
            })
        } else {
            RunState::Running {
                completed: completed + 1,
            }
        };

        Ok(&self.state)
    }

    /// Consume the session and return its outcome.
    pub fn finish(self) -> Result<RunOutcome, SessionError> {
        match self.state {
            RunState::Done(outcome) => Ok(outcome),
            RunState::Running { completed } => Err(SessionError::Incomplete {
                completed,
                planned: self.planned,
            }),
        }
    }
}
