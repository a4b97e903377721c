//! Test script name matching.
//!
//! A script is identified purely by its file name: a fixed prefix and a fixed suffix, compared
//! byte-for-byte and case-sensitively. The directory part of a path never participates.

use std::path::Path;

use crate::conventions::{SCRIPT_PREFIX, SCRIPT_SUFFIX};

/// Glob-like `<prefix>*<suffix>` pattern over file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptPattern {
    prefix: &'static str,
    suffix: &'static str,
}

impl Default for ScriptPattern {
    fn default() -> Self {
        Self::PYTHON_TESTS
    }
}

impl ScriptPattern {
    /// `test_*.py`
    pub const PYTHON_TESTS: ScriptPattern = ScriptPattern::new(SCRIPT_PREFIX, SCRIPT_SUFFIX);

    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// Check a bare file name against the pattern.
    ///
    /// The `*` may match the empty string, but prefix and suffix may not share bytes: `test_.py` matches,
    /// while a name shorter than `prefix + suffix` never does.
    pub fn matches_name(&self, name: &str) -> bool {
        self.matches_bytes(name.as_bytes())
    }

    /// Same as [`matches_name`](Self::matches_name) on raw bytes, so names that are not UTF-8 still match.
    pub fn matches_bytes(&self, name: &[u8]) -> bool {
        name.len() >= self.prefix.len() + self.suffix.len()
            && name.starts_with(self.prefix.as_bytes())
            && name.ends_with(self.suffix.as_bytes())
    }

    /// Check the final component of `path`, byte-wise like a shell glob.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.matches_bytes(name.as_encoded_bytes()))
    }
}

impl std::fmt::Display for ScriptPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}
