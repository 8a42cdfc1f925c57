use crate::checker::SpellingResult;
use crate::grammar::GrammarResult;
use crate::tone::{Tone, ToneResult};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything produced for one input.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling: Option<SpellingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<GrammarResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<ToneResult>,
}

impl Report {
    /// Misspelled words plus grammar corrections.
    pub fn issue_count(&self) -> usize {
        let spelling = self.spelling.as_ref().map_or(0, |s| s.words.len());
        let grammar = self.grammar.as_ref().map_or(0, |g| g.corrections.len());
        spelling + grammar
    }

    /// Grammar-corrected text, then tone-transformed if a tone ran.
    pub fn final_text<'a>(&'a self, input: &'a str) -> &'a str {
        if let Some(tone) = &self.tone {
            return &tone.transformed_text;
        }
        if let Some(grammar) = &self.grammar {
            return &grammar.corrected_text;
        }
        input
    }
}

pub fn print_report(
    report: &Report,
    colored_output: bool,
    format: OutputFormat,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_report(report, colored_output);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
            Ok(())
        }
    }
}

fn print_text_report(report: &Report, colored_output: bool) {
    if colored_output {
        println!("\n{}", report.source.bold().underline());
    } else {
        println!("\n{}", report.source);
    }

    if let Some(spelling) = &report.spelling {
        print_spelling(spelling, colored_output);
    }
    if let Some(grammar) = &report.grammar {
        print_grammar(grammar, colored_output);
    }
    if let Some(tone) = &report.tone {
        print_tone(tone, colored_output);
    }
}

fn print_spelling(result: &SpellingResult, colored_output: bool) {
    for error in &result.words {
        let span = format!("{}..{}", error.start, error.end);

        if colored_output {
            println!("  {} {}", span.blue().bold(), error.word.red().bold());

            if !error.suggestions.is_empty() {
                let suggestions = error
                    .suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("    {} {}", "→".dimmed(), suggestions);
            }
        } else {
            println!("  {} {}", span, error.word);

            if !error.suggestions.is_empty() {
                println!("    → {}", error.suggestions.join(", "));
            }
        }
    }
}

fn print_grammar(result: &GrammarResult, colored_output: bool) {
    for correction in &result.corrections {
        let span = format!("{}..{}", correction.start, correction.end);
        let edit = format!("{:?} → {:?}", correction.original, correction.corrected);

        if colored_output {
            println!(
                "  {} {} {} {}",
                span.blue().bold(),
                format!("[{}]", correction.kind).yellow(),
                edit,
                correction.explanation.dimmed()
            );
        } else {
            println!(
                "  {} [{}] {} {}",
                span, correction.kind, edit, correction.explanation
            );
        }
    }

    if !result.corrections.is_empty() {
        if colored_output {
            println!(
                "  {} {} ({:.2})",
                "Corrected:".cyan().bold(),
                result.corrected_text,
                result.confidence
            );
        } else {
            println!("  Corrected: {} ({:.2})", result.corrected_text, result.confidence);
        }
    }
}

fn print_tone(result: &ToneResult, colored_output: bool) {
    if !result.is_recognized() {
        let note = format!("Unknown tone '{}', text left unchanged", result.tone.id);
        if colored_output {
            println!("  {}", note.yellow());
        } else {
            println!("  {}", note);
        }
        return;
    }

    for change in &result.changes {
        if colored_output {
            println!(
                "  {} {:?} → {:?} {}",
                format!("[{}]", result.tone.id).magenta(),
                change.original,
                change.transformed,
                change.reason.dimmed()
            );
        } else {
            println!(
                "  [{}] {:?} → {:?} {}",
                result.tone.id, change.original, change.transformed, change.reason
            );
        }
    }

    if colored_output {
        println!(
            "  {} {} ({:.2})",
            format!("{}:", result.tone.name).cyan().bold(),
            result.transformed_text,
            result.confidence
        );
    } else {
        println!(
            "  {}: {} ({:.2})",
            result.tone.name, result.transformed_text, result.confidence
        );
    }
}

pub fn print_check_summary(total_issues: usize, inputs: usize, colored: bool) {
    println!();
    if total_issues == 0 {
        if colored {
            println!("{}", "✓ No issues found!".green().bold());
        } else {
            println!("✓ No issues found!");
        }
    } else {
        let issue_word = if total_issues == 1 { "issue" } else { "issues" };
        let input_word = if inputs == 1 { "input" } else { "inputs" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_issues.to_string().red().bold(),
                issue_word,
                inputs,
                input_word
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_issues, issue_word, inputs, input_word
            );
        }
    }
}

pub fn print_tones(colored: bool) {
    for tone in Tone::ALL {
        if colored {
            println!(
                "  {:<14} {:<14} {}",
                tone.id().cyan().bold(),
                tone.name(),
                tone.description().dimmed()
            );
        } else {
            println!("  {:<14} {:<14} {}", tone.id(), tone.name(), tone.description());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{check_grammar, Category};
    use crate::tone::transform;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_final_text_prefers_tone_then_grammar() {
        let input = "i can't come";
        let grammar = check_grammar(input, "en", Category::General);
        let tone = transform(&grammar.corrected_text, Tone::Polite, "en");

        let mut report = Report {
            source: "<text>".to_string(),
            spelling: None,
            grammar: Some(grammar),
            tone: None,
        };
        assert_eq!(report.final_text(input), "I cannot come.");
        assert_eq!(report.issue_count(), 3);

        report.tone = Some(tone);
        assert_eq!(report.final_text(input), "I cannot come. Thank you.");
    }

    #[test]
    fn test_json_report_skips_missing_sections() {
        let report = Report {
            source: "<text>".to_string(),
            spelling: None,
            grammar: Some(check_grammar("ok", "en", Category::General)),
            tone: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("spelling").is_none());
        assert_eq!(json["grammar"]["corrected_text"], "Ok.");
        assert_eq!(json["grammar"]["corrections"][0]["kind"], "grammar");
    }
}
