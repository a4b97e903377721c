//! Provide shared vocabulary and pure session logic for the `runtests` script runner.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both the
//! CLI and its tests rely on:
//! - which file names count as test scripts ([`pattern`]),
//! - the canonical output markers and exit codes ([`conventions`], [`messages`]),
//! - the fail-fast run state machine ([`session`]).
//!
//! ## Notes
//!
//! - **No IO** and no global state: discovery, interpreter lookup and process spawning live in the `runtests`
//!   crate. Everything here can be exercised with plain values.

pub mod conventions;
pub mod messages;
pub mod pattern;
pub mod session;

pub use pattern::ScriptPattern;
pub use session::{RunOutcome, RunState, ScriptStatus, Session, SessionError};
