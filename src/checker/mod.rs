//! Dictionary-based spelling detection with edit-distance suggestions.

pub mod dictionary;
pub mod suggestions;
pub mod tokenizer;

use dictionary::Dictionary;
use serde::Serialize;
use tracing::{debug, trace};

pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellingResult {
    pub text: String,
    pub words: Vec<WordCorrection>,
    pub has_errors: bool,
}

/// A misspelled word and its ranked replacements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCorrection {
    /// Surface form as typed
    pub word: String,
    pub start: usize,
    pub end: usize,
    /// Best first
    pub suggestions: Vec<String>,
    pub confidence: f32,
}

pub struct SpellChecker {
    dictionary: Dictionary,
    max_suggestions: usize,
    max_distance: usize,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellChecker {
    /// Checker over the built-in vocabulary
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::seeded())
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }

    pub fn with_limits(mut self, max_suggestions: usize, max_distance: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self.max_distance = max_distance;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Check every word of `text`, reporting unknown words in scan order.
    pub fn check(&self, text: &str) -> SpellingResult {
        let mut words = Vec::new();

        for token in tokenizer::tokenize(text) {
            if self.is_word_correct(token.text) {
                continue;
            }

            // Unknown words without suggestions are still reported
            let suggestions = self.suggest(token.text);
            let confidence = suggestions::confidence(token.text, &suggestions);

            words.push(WordCorrection {
                word: token.text.to_string(),
                start: token.start,
                end: token.end,
                suggestions,
                confidence,
            });
        }

        trace!(errors = words.len(), "checked spelling");

        SpellingResult {
            text: text.to_string(),
            has_errors: !words.is_empty(),
            words,
        }
    }

    /// A word is correct if it is known or made only of digits.
    pub fn is_word_correct(&self, word: &str) -> bool {
        let normalized = word.trim().to_lowercase();
        if normalized.is_empty() {
            return true;
        }

        if self.dictionary.contains(&normalized) {
            return true;
        }

        normalized.chars().all(|c| c.is_ascii_digit())
    }

    /// Learn a word so it is no longer reported.
    pub fn add_to_dictionary(&self, word: &str) {
        if self.dictionary.insert(word) {
            debug!(word, "added word to dictionary");
        }
    }

    /// Check a single word found at byte offset `position`.
    ///
    /// Returns `None` when the word is correct or nothing close enough is
    /// known.
    pub fn check_word(&self, word: &str, position: usize) -> Option<WordCorrection> {
        if self.is_word_correct(word) {
            return None;
        }

        let suggestions = self.suggest(word.trim());
        if suggestions.is_empty() {
            return None;
        }

        Some(WordCorrection {
            word: word.to_string(),
            start: position,
            end: position.saturating_add(word.len()),
            confidence: suggestions::confidence(word.trim(), &suggestions),
            suggestions,
        })
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        suggestions::generate(word, &self.dictionary, self.max_suggestions, self.max_distance)
    }
}
