use std::str::SplitWhitespace;

/// Lowercased tokens of a normalized string, left to right.
///
/// Borrows the input and can only be walked once.
#[derive(Debug)]
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(str::to_lowercase)
    }
}

/// Split on whitespace, dropping empty fragments, and lowercase each token.
pub fn tokenize(cleaned: &str) -> Tokens<'_> {
    Tokens {
        inner: cleaned.split_whitespace(),
    }
}
