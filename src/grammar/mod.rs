//! Pattern-based grammar and style checking.

pub mod category;
pub mod phrases;
pub mod rules;

pub use category::Category;

use crate::correction::{apply_corrections, Correction};
use serde::Serialize;
use std::collections::HashSet;
use tracing::trace;

/// Total confidence deduction never exceeds this.
const MAX_DEDUCTION: f32 = 0.9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarResult {
    pub original_text: String,
    pub corrected_text: String,
    pub corrections: Vec<Correction>,
    pub confidence: f32,
}

/// Run every applicable rule over `text` and apply the merged corrections.
///
/// Rules run on the trimmed input, so for non-blank text `original_text` is
/// the trimmed text and every correction span indexes into it. Blank input
/// comes back untouched.
pub fn check_grammar(text: &str, language: &str, category: Category) -> GrammarResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return GrammarResult {
            original_text: text.to_string(),
            corrected_text: text.to_string(),
            corrections: Vec::new(),
            confidence: 1.0,
        };
    }

    let english = language.trim().eq_ignore_ascii_case("en");

    let mut found = Vec::new();
    found.extend(rules::capitalization(trimmed));
    found.extend(rules::standalone_pronoun(trimmed));
    found.extend(rules::repeated_whitespace(trimmed));
    found.extend(rules::common_misspellings(trimmed));
    if english && category != Category::Casual {
        found.extend(rules::contraction_expansion(trimmed));
    }
    if category == Category::Formal {
        found.extend(rules::oxford_comma(trimmed));
    }
    found.extend(rules::terminal_punctuation(trimmed));

    let corrections = dedup(found);
    let corrected_text = apply_corrections(trimmed, &corrections);

    trace!(
        %category,
        language,
        corrections = corrections.len(),
        "checked grammar"
    );

    GrammarResult {
        original_text: trimmed.to_string(),
        corrected_text,
        confidence: confidence(&corrections),
        corrections,
    }
}

/// Drop corrections with the same span and replacement, keeping the first.
fn dedup(corrections: Vec<Correction>) -> Vec<Correction> {
    let mut seen = HashSet::new();
    corrections
        .into_iter()
        .filter(|c| seen.insert((c.start, c.end, c.corrected.to_lowercase())))
        .collect()
}

/// Start from 1.0 and deduct each correction's kind weight.
pub fn confidence(corrections: &[Correction]) -> f32 {
    let deduction: f32 = corrections.iter().map(|c| c.kind.weight()).sum();
    (1.0 - deduction.min(MAX_DEDUCTION)).clamp(0.5, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::CorrectionKind;

    fn kinds(result: &GrammarResult) -> Vec<CorrectionKind> {
        result.corrections.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_blank_input_is_identity() {
        let result = check_grammar("   ", "en", Category::General);
        assert_eq!(result.original_text, "   ");
        assert_eq!(result.corrected_text, "   ");
        assert!(result.corrections.is_empty());
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_pronoun_contraction_and_period() {
        let result = check_grammar("i don't know", "en", Category::General);

        assert_eq!(result.corrected_text, "I do not know.");
        // capitalization and pronoun fixes share a span and merge
        assert_eq!(
            kinds(&result),
            vec![CorrectionKind::Grammar, CorrectionKind::Tone, CorrectionKind::Punctuation]
        );
        assert!(result.confidence < 1.0);
        assert!(result.confidence >= 0.5);
    }

    #[test]
    fn test_corrected_text_is_stable() {
        let first = check_grammar("hello world", "en", Category::General);
        assert_eq!(first.corrected_text, "Hello world.");

        let second = check_grammar(&first.corrected_text, "en", Category::General);
        assert!(second.corrections.is_empty());
        assert_eq!(second.confidence, 1.0);
    }

    #[test]
    fn test_casual_keeps_contractions() {
        let result = check_grammar("don't worry", "en", Category::Casual);
        assert_eq!(result.corrected_text, "Don't worry.");
    }

    #[test]
    fn test_formal_expands_contractions_and_adds_oxford_comma() {
        let result = check_grammar("don't worry", "en", Category::Formal);
        assert_eq!(result.corrected_text, "Do not worry.");

        let result = check_grammar("We need eggs, milk and bread.", "en", Category::Formal);
        assert_eq!(result.corrected_text, "We need eggs, milk, and bread.");
        assert_eq!(kinds(&result), vec![CorrectionKind::Style]);
    }

    #[test]
    fn test_oxford_comma_only_when_formal() {
        let result = check_grammar("We need eggs, milk and bread.", "en", Category::Email);
        assert!(result.corrections.is_empty());
    }

    #[test]
    fn test_non_english_skips_contractions() {
        let result = check_grammar("don't  stop", "fr", Category::General);
        assert_eq!(result.corrected_text, "Don't stop.");

        let result = check_grammar("don't stop", "EN", Category::General);
        assert_eq!(result.corrected_text, "Do not stop.");
    }

    #[test]
    fn test_input_is_trimmed() {
        let result = check_grammar("  hello there  ", "en", Category::General);
        assert_eq!(result.original_text, "hello there");
        assert_eq!(result.corrected_text, "Hello there.");
        assert_eq!(result.corrections.last().unwrap().start, "hello there".len());
    }

    #[test]
    fn test_spans_index_into_original_text() {
        let result = check_grammar("i  recieve what i can't use", "en", Category::Formal);

        for c in &result.corrections {
            assert!(c.start <= c.end && c.end <= result.original_text.len());
            assert_eq!(&result.original_text[c.start..c.end], c.original);
        }
        assert_eq!(result.corrected_text, "I receive what I cannot use.");
    }

    #[test]
    fn test_confidence_floor() {
        let result = check_grammar("i  i  i  recieve", "en", Category::General);
        assert_eq!(result.confidence, 0.5);
    }
}
