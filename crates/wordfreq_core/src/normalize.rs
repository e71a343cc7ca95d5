use std::sync::LazyLock;

use regex::Regex;

/// Any run of characters outside `[0-9A-Za-z_]`. Whitespace is included, so
/// repeated spaces collapse together with punctuation.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").expect("separator pattern is valid"));

/// Replace every run of non-word characters (including whitespace) with a single space.
pub fn normalize(text: &str) -> String {
    SEPARATOR_RUN.replace_all(text, " ").into_owned()
}
