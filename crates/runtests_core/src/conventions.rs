//! Shared runner conventions (well-known names, markers and exit codes).

/// Interpreter looked up on the search path when none is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// File-name prefix of a test script.
pub const SCRIPT_PREFIX: &str = "test_";

/// File-name suffix of a test script.
pub const SCRIPT_SUFFIX: &str = ".py";

/// Final stdout line of a run in which every script passed.
pub const SUCCESS_MARKER: &str = "SUCCESS";

/// Leading token of the stdout line reporting a failed run.
pub const FAILURE_MARKER: &str = "FAILURE";

/// Process exit code when every discovered script passed.
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code for a missing interpreter or a failing script.
pub const EXIT_FAILURE: i32 = 1;

/// Environment variable naming the interpreter (overridden by `--interpreter`).
pub const INTERPRETER_ENV: &str = "RUNTESTS_INTERPRETER";

/// Environment variable naming the script directory (overridden by the `DIR` argument).
pub const SCRIPT_DIR_ENV: &str = "RUNTESTS_DIR";

/// Search path variable consulted for bare interpreter names.
pub const SEARCH_PATH_ENV: &str = "PATH";
