//! Shared user-facing output lines.
//!
//! The stdout lines are the runner's only reporting channel, so the console reporter and the tests build
//! them from the same helpers.

use std::path::Path;

use crate::conventions::{FAILURE_MARKER, SUCCESS_MARKER};
use crate::session::ScriptStatus;

/// Progress line announcing the command about to run: `<interpreter> <script>`.
pub fn command_line(interpreter: &Path, script: &Path) -> String {
    format!("{} {}", interpreter.display(), script.display())
}

/// `FAILURE: <details...>`, joining any extra diagnostic parts with single spaces.
pub fn failure_line<I, S>(details: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = format!("{FAILURE_MARKER}:");
    for detail in details {
        let detail = detail.as_ref();
        if !detail.is_empty() {
            line.push(' ');
            line.push_str(detail);
        }
    }
    line
}

/// Failure line for a script that ended with a non-zero status.
pub fn script_failure_line(script: &Path, status: ScriptStatus) -> String {
    failure_line([script.display().to_string(), status.to_string()])
}

/// Final line of a run in which every script passed.
pub fn success_line() -> &'static str {
    SUCCESS_MARKER
}
