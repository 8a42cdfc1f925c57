pub const DEFAULT_PHRASE_LIMIT: usize = 5;

const COMPLETIONS: &[(&str, &[&str])] = &[
    (
        "thank you",
        &[
            "Thank you for your time",
            "Thank you for the opportunity",
            "Thank you for your help",
        ],
    ),
    (
        "i would like",
        &["I would like to", "I would like to know", "I would like to discuss"],
    ),
    (
        "please let me",
        &["Please let me know", "Please let me know if", "Please let me know when"],
    ),
    (
        "i hope",
        &["I hope this helps", "I hope you're doing well", "I hope to hear from you soon"],
    ),
];

/// Canned completions for common openers found anywhere in `text`.
pub fn suggest_phrases(text: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    COMPLETIONS
        .iter()
        .filter(|(opener, _)| lowered.contains(opener))
        .flat_map(|(_, completions)| completions.iter())
        .take(limit)
        .map(|s| s.to_string())
        .collect()
}
