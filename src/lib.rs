//! On-device text analysis: dictionary spelling suggestions, pattern-based
//! grammar and style corrections, and rule-based tone rewriting.
//!
//! The analyzers are pure and infallible. Results carry byte-offset spans
//! that [`apply_corrections`] materializes onto the text.

pub mod checker;
pub mod cli;
pub mod config;
pub mod correction;
pub mod error;
pub mod grammar;
pub mod tone;

pub use checker::dictionary::Dictionary;
pub use checker::suggestions::edit_distance;
pub use checker::{SpellChecker, SpellingResult, WordCorrection};
pub use config::Config;
pub use correction::{apply_corrections, Correction, CorrectionKind};
pub use error::{Error, Result};
pub use grammar::phrases::suggest_phrases;
pub use grammar::{check_grammar, Category, GrammarResult};
pub use tone::{transform, transform_tone, Tone, ToneChange, ToneResult, ToneStyle};
