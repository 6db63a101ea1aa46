//! Test identifiers to filesystem-safe path segments

use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Segment used when nothing alphanumeric survives sanitizing.
pub const PLACEHOLDER_SEGMENT: &str = "unknown-test";

/// Map a test nodeid to a single lowercase, hyphen-delimited path segment.
///
/// Every run of characters outside `[a-z0-9]` (after lowercasing) becomes
/// one `-`, and leading/trailing hyphens are stripped. Distinct nodeids can
/// collide; no deduplication is attempted.
///
/// # Example
///
/// ```
/// use plugin_artifacts::sanitize;
///
/// assert_eq!(
///     sanitize("tests/test_foo.py::test_bar[param-1]"),
///     "tests-test-foo-py-test-bar-param-1"
/// );
/// assert_eq!(sanitize(":::"), "unknown-test");
/// ```
pub fn sanitize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let replaced = NON_ALPHANUMERIC_RUN.replace_all(&lowered, "-");
    let trimmed = replaced.trim_matches('-');
    if trimmed.is_empty() {
        PLACEHOLDER_SEGMENT.to_string()
    } else {
        trimmed.to_string()
    }
}
