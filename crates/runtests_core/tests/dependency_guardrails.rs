//! Keep `runtests_core` free of runtime dependencies.
//!
//! The core crate holds the pure vocabulary shared by the CLI and its tests. Anything that needs a
//! third-party crate (logging, CLI parsing, process handling) belongs in the `runtests` crate instead.

#[test]
fn core_has_no_runtime_dependencies() {
    let manifest = include_str!("../Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]" || line.starts_with("[dependencies.");
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        panic!("`runtests_core` must not declare runtime dependencies, found: {line}");
    }
}

#[test]
fn core_sources_do_not_touch_the_process_environment() {
    let sources = [
        include_str!("../src/lib.rs"),
        include_str!("../src/conventions.rs"),
        include_str!("../src/messages.rs"),
        include_str!("../src/pattern.rs"),
        include_str!("../src/session.rs"),
    ];

    for source in sources {
        for forbidden in ["std::fs", "std::process", "std::env", "println!"] {
            assert!(!source.contains(forbidden), "core source uses `{forbidden}`");
        }
    }
}
