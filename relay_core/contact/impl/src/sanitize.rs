//! Defense against header/content injection. Idempotent: re-sanitizing an
//! already sanitized value yields the same string.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());

/// Strip every CR and LF; the name ends up next to headers.
pub(crate) fn name(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Collapse any run of line breaks to a single newline.
pub(crate) fn message(input: &str) -> String {
    LINE_BREAK_RUNS.replace_all(input, "\n").trim().to_owned()
}
