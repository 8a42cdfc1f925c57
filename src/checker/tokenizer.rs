use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b[a-zA-Z]+\b").unwrap();
}

/// A word as it appears in the checked text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split text into ASCII-letter words, left to right.
///
/// Letter runs glued to digits or non-ASCII letters are not words and are
/// skipped whole.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token<'_>> {
    WORD.find_iter(text).map(|m| Token {
        text: m.as_str(),
        start: m.start(),
        end: m.end(),
    })
}
