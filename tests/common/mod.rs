//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test crate uses a different subset")]

use assert_cmd::{Command, assert::Assert};
use smartcap::{Config, ExtensionSet};

/// Build a `Command` for the `smartcap` binary.
pub fn smartcap() -> Command {
    Command::cargo_bin("smartcap").expect("Failed to create cargo command for smartcap")
}

/// Run the binary with `args`, feeding `input` on standard input.
pub fn run_cli_with_stdin(args: &[&str], input: &str) -> Assert {
    smartcap().args(args).write_stdin(input).assert()
}

/// Run the binary with `args` and no standard input.
pub fn run_cli_with_args(args: &[&str]) -> Assert {
    smartcap().args(args).write_stdin("").assert()
}

/// A configuration with every optional rule switched on.
pub fn everything_on() -> Config {
    Config {
        dot_at_end: true,
        dot_at_each_line: true,
        ..Config::default()
    }
}

/// An oracle that knows only the listed extensions.
pub fn oracle(exts: &[&str]) -> ExtensionSet {
    exts.iter().copied().collect()
}
