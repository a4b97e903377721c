#![forbid(unsafe_code)]
//! runtests: run Python test scripts one at a time, stopping at the first failure.
//!
//! The runner discovers `test_*.py` files in a single directory, runs each with a `python3` found on the
//! search path, and reports progress on stdout. The first script that exits non-zero ends the run with
//! exit status 1; otherwise it prints `SUCCESS` and exits 0.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod version;

pub use cli::config::{DiscoveryOrder, InterpreterSpec, RunConfig};
pub use cli::test_interfaces::TestError;
pub use cli::test_runner::{ConsoleReporter, RunReporter, TestRunner};
