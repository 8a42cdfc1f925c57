//! Independent grammar and style rules.
//!
//! Every rule inspects the same input and reports corrections with spans
//! into it; none of them sees another rule's output.

use crate::correction::{Correction, CorrectionKind};
use lazy_static::lazy_static;
use regex::Regex;

const CONTRACTIONS: &[(&str, &str)] = &[
    ("can't", "cannot"),
    ("won't", "will not"),
    ("don't", "do not"),
];

const COMMON_MISSPELLINGS: &[(&str, &str)] = &[
    ("recieve", "receive"),
    ("seperate", "separate"),
    ("definately", "definitely"),
    ("occured", "occurred"),
    ("accomodate", "accommodate"),
    ("begining", "beginning"),
    ("beleive", "believe"),
    ("calender", "calendar"),
    ("cemetary", "cemetery"),
    ("concious", "conscious"),
];

lazy_static! {
    static ref STANDALONE_I: Regex = Regex::new(r"\bi\b").unwrap();
    static ref REPEATED_WHITESPACE: Regex = Regex::new(r"\s{2,}").unwrap();
    static ref CONTRACTION: Regex = Regex::new(&word_alternation(CONTRACTIONS)).unwrap();
    static ref MISSPELLING: Regex = Regex::new(&word_alternation(COMMON_MISSPELLINGS)).unwrap();
    static ref SERIAL_LIST: Regex = Regex::new(r"(\w+), (\w+) and (\w+)").unwrap();
}

fn word_alternation(table: &[(&str, &str)]) -> String {
    let words: Vec<String> = table.iter().map(|(from, _)| regex::escape(from)).collect();
    format!(r"(?i)\b(?:{})\b", words.join("|"))
}

fn lookup<'a>(table: &'a [(&str, &str)], word: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(word))
        .map(|(_, to)| *to)
}

/// Carry a leading capital from `matched` over to `replacement`.
fn match_leading_case(matched: &str, replacement: &str) -> String {
    let leading_upper = matched.chars().next().is_some_and(|c| c.is_uppercase());
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if leading_upper => first.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}

pub fn capitalization(text: &str) -> Vec<Correction> {
    match text.chars().next() {
        Some(first) if first.is_lowercase() => vec![Correction::replace(
            text,
            0,
            first.len_utf8(),
            first.to_uppercase().to_string(),
            CorrectionKind::Grammar,
            "Sentences start with a capital letter",
        )],
        _ => Vec::new(),
    }
}

pub fn standalone_pronoun(text: &str) -> Vec<Correction> {
    STANDALONE_I
        .find_iter(text)
        .map(|m| {
            Correction::replace(
                text,
                m.start(),
                m.end(),
                "I",
                CorrectionKind::Grammar,
                "The pronoun \"I\" is always capitalized",
            )
        })
        .collect()
}

pub fn repeated_whitespace(text: &str) -> Vec<Correction> {
    REPEATED_WHITESPACE
        .find_iter(text)
        .map(|m| {
            Correction::replace(
                text,
                m.start(),
                m.end(),
                " ",
                CorrectionKind::Style,
                "Repeated whitespace",
            )
        })
        .collect()
}

pub fn common_misspellings(text: &str) -> Vec<Correction> {
    MISSPELLING
        .find_iter(text)
        .filter_map(|m| {
            let fixed = lookup(COMMON_MISSPELLINGS, m.as_str())?;
            Some(Correction::replace(
                text,
                m.start(),
                m.end(),
                match_leading_case(m.as_str(), fixed),
                CorrectionKind::Spelling,
                "Common spelling error",
            ))
        })
        .collect()
}

pub fn contraction_expansion(text: &str) -> Vec<Correction> {
    CONTRACTION
        .find_iter(text)
        .filter_map(|m| {
            let expanded = lookup(CONTRACTIONS, m.as_str())?;
            Some(Correction::replace(
                text,
                m.start(),
                m.end(),
                match_leading_case(m.as_str(), expanded),
                CorrectionKind::Tone,
                "formal tone.",
            ))
        })
        .collect()
}

/// Only the first list in the text is corrected.
pub fn oxford_comma(text: &str) -> Vec<Correction> {
    SERIAL_LIST
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|second| {
            vec![Correction::insert(
                second.end(),
                ",",
                CorrectionKind::Style,
                "Oxford comma before the final list item",
            )]
        })
        .unwrap_or_default()
}

pub fn terminal_punctuation(text: &str) -> Vec<Correction> {
    if text.is_empty() || text.ends_with(&['.', '!', '?'][..]) {
        return Vec::new();
    }

    vec![Correction::insert(
        text.len(),
        ".",
        CorrectionKind::Punctuation,
        "Missing period at end of sentence",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalization() {
        let corrections = capitalization("hello");
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].original, "h");
        assert_eq!(corrections[0].corrected, "H");
        assert_eq!((corrections[0].start, corrections[0].end), (0, 1));

        assert!(capitalization("Hello").is_empty());
        assert!(capitalization("42 apples").is_empty());
    }

    #[test]
    fn test_standalone_pronoun_is_whole_word() {
        let corrections = standalone_pronoun("if i go, i win in it");
        let starts: Vec<_> = corrections.iter().map(|c| c.start).collect();
        assert_eq!(starts, vec![3, 9]);
    }

    #[test]
    fn test_repeated_whitespace() {
        let corrections = repeated_whitespace("a  b\t\t c d");
        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections[0].original, "  ");
        assert_eq!(corrections[1].original, "\t\t ");
        assert!(corrections.iter().all(|c| c.corrected == " "));
    }

    #[test]
    fn test_contraction_expansion_keeps_leading_capital() {
        let corrections = contraction_expansion("Don't say you can't or WON'T");
        let fixed: Vec<_> = corrections.iter().map(|c| c.corrected.as_str()).collect();
        assert_eq!(fixed, vec!["Do not", "cannot", "Will not"]);
        assert!(corrections.iter().all(|c| c.kind == CorrectionKind::Tone));
    }

    #[test]
    fn test_common_misspellings() {
        let corrections = common_misspellings("Recieve it, then recieve it again");
        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections[0].corrected, "Receive");
        assert_eq!(corrections[1].corrected, "receive");
        assert!(common_misspellings("unrecieved").is_empty());
    }

    #[test]
    fn test_oxford_comma_first_list_only() {
        let text = "red, green and blue; one, two and three";
        let corrections = oxford_comma(text);

        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].start, "red, green".len());
        assert!(corrections[0].is_insertion());
    }

    #[test]
    fn test_terminal_punctuation() {
        let corrections = terminal_punctuation("done");
        assert_eq!(corrections[0].start, 4);
        assert_eq!(corrections[0].end, 4);
        assert_eq!(corrections[0].original, "");

        assert!(terminal_punctuation("done?").is_empty());
        assert!(terminal_punctuation("").is_empty());
    }
}
