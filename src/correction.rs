//! Span corrections and their application onto a text.
//!
//! A [`Correction`] replaces the half-open byte range `[start, end)` of the
//! text it was computed against. Pure insertions have `start == end` and an
//! empty `original`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionKind {
    Spelling,
    Grammar,
    Punctuation,
    Style,
    Tone,
}

impl CorrectionKind {
    /// Confidence deducted for each correction of this kind.
    pub fn weight(self) -> f32 {
        match self {
            CorrectionKind::Grammar => 0.25,
            CorrectionKind::Spelling => 0.20,
            CorrectionKind::Punctuation => 0.15,
            CorrectionKind::Style => 0.10,
            CorrectionKind::Tone => 0.10,
        }
    }
}

impl fmt::Display for CorrectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CorrectionKind::Spelling => "spelling",
            CorrectionKind::Grammar => "grammar",
            CorrectionKind::Punctuation => "punctuation",
            CorrectionKind::Style => "style",
            CorrectionKind::Tone => "tone",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
    pub kind: CorrectionKind,
    pub start: usize,
    pub end: usize,
    pub explanation: String,
}

impl Correction {
    /// Replace `text[start..end]` with `corrected`.
    pub fn replace(
        text: &str,
        start: usize,
        end: usize,
        corrected: impl Into<String>,
        kind: CorrectionKind,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            original: text[start..end].to_string(),
            corrected: corrected.into(),
            kind,
            start,
            end,
            explanation: explanation.into(),
        }
    }

    /// Insert `corrected` at `at` without removing anything.
    pub fn insert(
        at: usize,
        corrected: impl Into<String>,
        kind: CorrectionKind,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            original: String::new(),
            corrected: corrected.into(),
            kind,
            start: at,
            end: at,
            explanation: explanation.into(),
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.start == self.end
    }
}

/// Apply `corrections` to `text`, highest offsets first.
///
/// Spans sharing a start are applied widest first, then in input order.
/// Offsets are clamped into the current buffer and snapped down to a char
/// boundary, so stale spans never index out of bounds.
pub fn apply_corrections(text: &str, corrections: &[Correction]) -> String {
    if corrections.is_empty() {
        return text.to_string();
    }

    let mut ordered: Vec<&Correction> = corrections.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut result = text.to_string();
    for correction in ordered {
        let start = floor_char_boundary(&result, correction.start);
        let end = floor_char_boundary(&result, correction.end).max(start);
        result.replace_range(start..end, &correction.corrected);
    }

    result
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corrections_is_identity() {
        assert_eq!(apply_corrections("hello world", &[]), "hello world");
    }

    #[test]
    fn test_apply_replacement_and_insertion() {
        let text = "i can't go";
        let corrections = vec![
            Correction::replace(text, 0, 1, "I", CorrectionKind::Grammar, "pronoun"),
            Correction::replace(text, 2, 7, "cannot", CorrectionKind::Tone, "formal tone."),
            Correction::insert(text.len(), ".", CorrectionKind::Punctuation, "period"),
        ];

        assert_eq!(apply_corrections(text, &corrections), "I cannot go.");
    }

    #[test]
    fn test_shared_start_applies_wider_span_first() {
        let text = "don't worry";
        let corrections = vec![
            Correction::replace(text, 0, 1, "D", CorrectionKind::Grammar, "capital"),
            Correction::replace(text, 0, 5, "do not", CorrectionKind::Tone, "formal tone."),
        ];

        assert_eq!(apply_corrections(text, &corrections), "Do not worry");
    }

    #[test]
    fn test_out_of_range_offsets_are_clamped() {
        let corrections = vec![Correction {
            original: String::new(),
            corrected: "!".to_string(),
            kind: CorrectionKind::Punctuation,
            start: 40,
            end: 50,
            explanation: "stale span".to_string(),
        }];

        assert_eq!(apply_corrections("short", &corrections), "short!");
    }

    #[test]
    fn test_mid_codepoint_offsets_do_not_panic() {
        let corrections = vec![Correction {
            original: String::new(),
            corrected: "x".to_string(),
            kind: CorrectionKind::Style,
            start: 1,
            end: 1,
            explanation: "inside a multibyte char".to_string(),
        }];

        assert_eq!(apply_corrections("é", &corrections), "xé");
    }

    #[test]
    fn test_kind_weights() {
        assert_eq!(CorrectionKind::Grammar.weight(), 0.25);
        assert_eq!(CorrectionKind::Tone.weight(), 0.10);
    }
}
