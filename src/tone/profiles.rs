//! Rule tables for each tone.
//!
//! A profile is an ordered list of steps; the transformer runs them in
//! order against a working copy of the text.

use super::style::Tone;

pub type Table = &'static [(&'static str, &'static str)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneStep {
    /// Replace every case-insensitive occurrence of each entry.
    Substitute { table: Table, reason: &'static str },
    /// Replace a leading greeting word.
    Greeting {
        from: &'static str,
        to: &'static str,
        reason: &'static str,
    },
    /// Replace a phrase unless a marker is already present.
    SubstituteUnless {
        present: &'static [&'static str],
        from: &'static str,
        to: &'static str,
        reason: &'static str,
    },
    /// Append `addition` after `separator` unless a marker is present.
    AppendUnless {
        present: &'static [&'static str],
        separator: &'static str,
        addition: &'static str,
        reason: &'static str,
    },
    /// Open with `prefix` unless a marker is present.
    PrefixUnless {
        present: &'static [&'static str],
        prefix: &'static str,
        reason: &'static str,
    },
    /// Delete whole-word occurrences of each phrase.
    Remove {
        phrases: &'static [&'static str],
        reason: &'static str,
    },
    /// Collapse whitespace runs to one space and trim the ends.
    CollapseWhitespace,
}

impl ToneStep {
    /// Phrases this step searches for without regard to case.
    pub fn needles(&self) -> Vec<&'static str> {
        match *self {
            ToneStep::Substitute { table, .. } => table.iter().map(|&(from, _)| from).collect(),
            ToneStep::SubstituteUnless { present, from, .. } => {
                present.iter().copied().chain([from]).collect()
            }
            ToneStep::AppendUnless { present, .. } | ToneStep::PrefixUnless { present, .. } => {
                present.to_vec()
            }
            ToneStep::Greeting { .. } | ToneStep::Remove { .. } | ToneStep::CollapseWhitespace => {
                Vec::new()
            }
        }
    }

    /// Whole words this step deletes.
    pub fn removals(&self) -> &'static [&'static str] {
        match *self {
            ToneStep::Remove { phrases, .. } => phrases,
            _ => &[],
        }
    }
}

const EXPANDED: Table = &[
    ("don't", "do not"),
    ("won't", "will not"),
    ("can't", "cannot"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("wouldn't", "would not"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
];

const CONTRACTED: Table = &[
    ("do not", "don't"),
    ("will not", "won't"),
    ("cannot", "can't"),
    ("is not", "isn't"),
    ("are not", "aren't"),
    ("was not", "wasn't"),
    ("were not", "weren't"),
    ("have not", "haven't"),
    ("has not", "hasn't"),
    ("had not", "hadn't"),
    ("would not", "wouldn't"),
    ("could not", "couldn't"),
    ("should not", "shouldn't"),
];

const EXCLAMATION: &[&str] = &["!"];

pub static PROFESSIONAL: &[ToneStep] = &[
    ToneStep::Substitute {
        table: EXPANDED,
        reason: "Professional tone requires full words",
    },
    ToneStep::Greeting {
        from: "hi",
        to: "Hello",
        reason: "Professional greeting",
    },
];

pub static CASUAL: &[ToneStep] = &[
    ToneStep::Substitute {
        table: CONTRACTED,
        reason: "Casual tone uses contractions",
    },
    ToneStep::Greeting {
        from: "hello",
        to: "Hey",
        reason: "Casual greeting",
    },
];

pub static POLITE: &[ToneStep] = &[
    ToneStep::SubstituteUnless {
        present: &["please"],
        from: "can you",
        to: "Could you please",
        reason: "More polite request",
    },
    ToneStep::AppendUnless {
        present: &["thank you", "thanks"],
        separator: " ",
        addition: "Thank you.",
        reason: "Polite closing",
    },
];

pub static FRIENDLY: &[ToneStep] = &[
    ToneStep::AppendUnless {
        present: EXCLAMATION,
        separator: "",
        addition: "!",
        reason: "Friendly exclamation",
    },
    ToneStep::Substitute {
        table: &[("good", "great"), ("okay", "awesome"), ("fine", "fantastic")],
        reason: "More friendly word choice",
    },
];

pub static CONFIDENT: &[ToneStep] = &[ToneStep::Substitute {
    table: &[
        ("maybe", "definitely"),
        ("perhaps", "certainly"),
        ("might", "will"),
        ("could", "can"),
        ("possibly", "absolutely"),
    ],
    reason: "More confident language",
}];

pub static EMPATHETIC: &[ToneStep] = &[
    ToneStep::PrefixUnless {
        present: &["understand"],
        prefix: "I understand that ",
        reason: "Empathetic opening",
    },
    ToneStep::AppendUnless {
        present: &["difficult", "challenging"],
        separator: " ",
        addition: "I'm here to help.",
        reason: "Supportive closing",
    },
];

pub static PERSUASIVE: &[ToneStep] = &[
    ToneStep::Substitute {
        table: &[("good", "excellent"), ("nice", "outstanding"), ("okay", "remarkable")],
        reason: "More persuasive language",
    },
    ToneStep::AppendUnless {
        present: EXCLAMATION,
        separator: " ",
        addition: "Don't miss out!",
        reason: "Call to action",
    },
];

pub static CONCISE: &[ToneStep] = &[
    ToneStep::Remove {
        phrases: &[
            "very",
            "really",
            "quite",
            "rather",
            "somewhat",
            "pretty",
            "I think",
            "I believe",
            "in my opinion",
            "it seems like",
        ],
        reason: "Removed unnecessary word for conciseness",
    },
    ToneStep::CollapseWhitespace,
];

pub static DETAILED: &[ToneStep] = &[ToneStep::Substitute {
    table: &[
        ("good", "exceptionally good"),
        ("bad", "significantly problematic"),
        ("big", "substantially large"),
        ("small", "considerably small"),
    ],
    reason: "More detailed description",
}];

pub static CREATIVE: &[ToneStep] = &[ToneStep::Substitute {
    table: &[
        ("good", "brilliant"),
        ("bad", "terrible"),
        ("big", "enormous"),
        ("small", "tiny"),
    ],
    reason: "More creative word choice",
}];

pub static TECHNICAL: &[ToneStep] = &[ToneStep::Substitute {
    table: &[
        ("good", "optimal"),
        ("bad", "suboptimal"),
        ("big", "large-scale"),
        ("small", "minimal"),
    ],
    reason: "Technical terminology",
}];

pub static ROMANTIC: &[ToneStep] = &[ToneStep::Substitute {
    table: &[
        ("love", "adore"),
        ("like", "cherish"),
        ("good", "wonderful"),
        ("beautiful", "stunning"),
    ],
    reason: "More romantic language",
}];

pub static HUMOROUS: &[ToneStep] = &[ToneStep::AppendUnless {
    present: EXCLAMATION,
    separator: " ",
    addition: "😄",
    reason: "Added humor",
}];

pub static SARCASM: &[ToneStep] = &[ToneStep::AppendUnless {
    present: EXCLAMATION,
    separator: " ",
    addition: "(not really)",
    reason: "Sarcastic addition",
}];

pub static GEN_Z: &[ToneStep] = &[ToneStep::Substitute {
    table: &[
        ("good", "slaps"),
        ("bad", "mid"),
        ("cool", "fire"),
        ("awesome", "no cap"),
    ],
    reason: "Gen Z slang",
}];

impl Tone {
    pub fn profile(self) -> &'static [ToneStep] {
        match self {
            Tone::Professional => PROFESSIONAL,
            Tone::Casual => CASUAL,
            Tone::Polite => POLITE,
            Tone::Friendly => FRIENDLY,
            Tone::Confident => CONFIDENT,
            Tone::Empathetic => EMPATHETIC,
            Tone::Persuasive => PERSUASIVE,
            Tone::Concise => CONCISE,
            Tone::Detailed => DETAILED,
            Tone::Creative => CREATIVE,
            Tone::Technical => TECHNICAL,
            Tone::Romantic => ROMANTIC,
            Tone::Humorous => HUMOROUS,
            Tone::Sarcasm => SARCASM,
            Tone::GenZ => GEN_Z,
        }
    }
}
