//! Rule-based tone rewriting.

pub mod profiles;
pub mod style;

pub use profiles::ToneStep;
pub use style::{Tone, ToneStyle};

use aho_corasick::AhoCorasick;
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, trace};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    /// Case-insensitive matcher for every phrase a profile searches for
    static ref MATCHERS: HashMap<&'static str, AhoCorasick> = profile_steps()
        .flat_map(ToneStep::needles)
        .filter_map(|needle| phrase_matcher(needle).map(|matcher| (needle, matcher)))
        .collect();

    static ref REMOVALS: HashMap<&'static str, Regex> = profile_steps()
        .flat_map(ToneStep::removals)
        .filter_map(|&phrase| whole_word(phrase).map(|pattern| (phrase, pattern)))
        .collect();
}

fn profile_steps() -> impl Iterator<Item = &'static ToneStep> {
    Tone::ALL.into_iter().flat_map(|tone| tone.profile().iter())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneResult {
    pub original_text: String,
    pub transformed_text: String,
    pub tone: ToneStyle,
    pub confidence: f32,
    pub changes: Vec<ToneChange>,
    /// `false` when the tone id matched no known tone and the text passed
    /// through untouched.
    pub recognized: bool,
}

impl ToneResult {
    pub fn is_recognized(&self) -> bool {
        self.recognized
    }
}

/// One rewrite made while applying a tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneChange {
    pub original: String,
    pub transformed: String,
    pub reason: String,
}

impl ToneChange {
    fn new(original: &str, transformed: &str, reason: &str) -> Self {
        Self {
            original: original.to_string(),
            transformed: transformed.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Rewrite `text` in the tone named by `tone_id`.
///
/// Unknown identifiers are not an error: the text comes back unchanged with
/// no changes and `recognized == false`.
pub fn transform_tone(text: &str, tone_id: &str, language: &str) -> ToneResult {
    match Tone::from_id(tone_id) {
        Some(tone) => transform(text, tone, language),
        None => {
            debug!(tone_id, "unrecognized tone, passing text through");
            ToneResult {
                original_text: text.to_string(),
                transformed_text: text.to_string(),
                tone: ToneStyle {
                    id: tone_id.to_string(),
                    name: tone_id.to_string(),
                },
                confidence: confidence(text, text),
                changes: Vec::new(),
                recognized: false,
            }
        }
    }
}

pub fn transform(text: &str, tone: Tone, language: &str) -> ToneResult {
    let mut working = text.to_string();
    let mut changes = Vec::new();

    for step in tone.profile() {
        apply_step(&mut working, step, &mut changes);
    }

    trace!(%tone, language, changes = changes.len(), "transformed tone");

    ToneResult {
        original_text: text.to_string(),
        confidence: confidence(text, &working),
        transformed_text: working,
        tone: tone.into(),
        changes,
        recognized: true,
    }
}

fn apply_step(text: &mut String, step: &ToneStep, changes: &mut Vec<ToneChange>) {
    match *step {
        ToneStep::Substitute { table, reason } => {
            for &(from, to) in table {
                if let Some(replaced) = replace_ignore_case(text, from, to) {
                    *text = replaced;
                    changes.push(ToneChange::new(from, to, reason));
                }
            }
        }
        ToneStep::Greeting { from, to, reason } => {
            if starts_with_word(text, from) {
                let greeting = text[..from.len()].to_string();
                text.replace_range(..from.len(), to);
                changes.push(ToneChange::new(&greeting, to, reason));
            }
        }
        ToneStep::SubstituteUnless {
            present,
            from,
            to,
            reason,
        } => {
            if !contains_any(text, present) {
                if let Some(replaced) = replace_ignore_case(text, from, to) {
                    *text = replaced;
                    changes.push(ToneChange::new(from, to, reason));
                }
            }
        }
        ToneStep::AppendUnless {
            present,
            separator,
            addition,
            reason,
        } => {
            if !contains_any(text, present) {
                text.push_str(separator);
                text.push_str(addition);
                changes.push(ToneChange::new("", addition, reason));
            }
        }
        ToneStep::PrefixUnless {
            present,
            prefix,
            reason,
        } => {
            if !contains_any(text, present) {
                *text = format!("{}{}", prefix, lower_first(text));
                changes.push(ToneChange::new("", prefix, reason));
            }
        }
        ToneStep::Remove { phrases, reason } => {
            for &phrase in phrases {
                if let Some(removed) = remove_word(text, phrase) {
                    *text = removed;
                    changes.push(ToneChange::new(phrase, "", reason));
                }
            }
        }
        ToneStep::CollapseWhitespace => {
            let collapsed = WHITESPACE.replace_all(text, " ");
            *text = collapsed.trim().to_string();
        }
    }
}

fn phrase_matcher(phrase: &str) -> Option<AhoCorasick> {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build([phrase])
        .ok()
}

fn whole_word(phrase: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).ok()
}

/// Run `f` with the prebuilt matcher for `phrase`, building one for phrases
/// outside the profiles.
fn with_matcher<T>(phrase: &str, f: impl FnOnce(&AhoCorasick) -> T) -> Option<T> {
    match MATCHERS.get(phrase) {
        Some(matcher) => Some(f(matcher)),
        None => phrase_matcher(phrase).map(|matcher| f(&matcher)),
    }
}

/// Replace every occurrence of `from`, ignoring ASCII case.
/// `None` when there is nothing to replace.
fn replace_ignore_case(text: &str, from: &str, to: &str) -> Option<String> {
    with_matcher(from, |matcher| {
        matcher
            .is_match(text)
            .then(|| matcher.replace_all(text, &[to]))
    })
    .flatten()
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers
        .iter()
        .any(|marker| with_matcher(marker, |matcher| matcher.is_match(text)).unwrap_or(false))
}

fn starts_with_word(text: &str, word: &str) -> bool {
    let Some(head) = text.get(..word.len()) else {
        return false;
    };

    head.eq_ignore_ascii_case(word)
        && !text[word.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric())
}

fn remove_word(text: &str, phrase: &str) -> Option<String> {
    match REMOVALS.get(phrase) {
        Some(pattern) => strip(pattern, text),
        None => strip(&whole_word(phrase)?, text),
    }
}

fn strip(pattern: &Regex, text: &str) -> Option<String> {
    if !pattern.is_match(text) {
        return None;
    }
    Some(pattern.replace_all(text, NoExpand("")).into_owned())
}

/// Lower-case the first letter so the text reads on after a prefix,
/// leaving the pronoun "I" alone.
fn lower_first(text: &str) -> String {
    if starts_with_word(text, "I") {
        return text.to_string();
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Heuristic confidence from how much the text grew.
pub fn confidence(original: &str, transformed: &str) -> f32 {
    let original_len = original.chars().count();
    let ratio = if original_len > 0 {
        (transformed.chars().count() as f32 - original_len as f32) / original_len as f32
    } else {
        0.0
    };

    if ratio > 0.5 {
        0.9
    } else if ratio > 0.2 {
        0.8
    } else if ratio > 0.1 {
        0.7
    } else {
        0.6
    }
}
