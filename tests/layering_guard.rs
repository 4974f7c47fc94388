//! Layering guardrails for the workspace.
//!
//! - `tiny_core` is a pure vocabulary crate: it has no dependencies at all.
//! - `tiny_syntax` must not reach up into the binary's concerns (the `tiny` crate itself, argument parsing or
//!   installing a log subscriber).
//!
//! These tests scan the member manifests' `[dependencies]` tables.

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let deps = main_dependencies(include_str!("../crates/tiny_core/Cargo.toml"));
    assert!(deps.is_empty(), "tiny_core must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_does_not_depend_on_binary_concerns() {
    let deps = main_dependencies(include_str!("../crates/tiny_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "tiny_core"));
    for forbidden in ["tiny", "clap", "tracing-subscriber"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in tiny_syntax [dependencies]"
        );
    }
}
